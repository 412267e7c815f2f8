//! Error types for payload decoding and tree evaluation.
//!
//! `EvalErrorKind` is the structured category; its `Display` output is the
//! exact text sent back to clients. Factory functions (e.g.
//! `division_by_zero()`) are the public way to build errors.

use std::fmt;

/// Result of evaluating an expression tree.
pub type EvalResult = Result<f64, EvalError>;

/// Which operand slot of a node a value came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Key under which this operand is stored in a node mapping.
    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a value could not be read as a node or an operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeMismatch {
    /// `operation` is absent or not a string.
    OperationNotString,
    /// The node mapping has no key for this operand.
    MissingOperand(Side),
    /// An operand is neither a number nor a node mapping.
    NotAnOperand { found: &'static str },
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperationNotString => write!(f, "`operation` must be a string"),
            Self::MissingOperand(side) => write!(f, "missing `{side}` operand"),
            Self::NotAnOperand { found } => {
                write!(f, "expected a number or an expression node, got {found}")
            }
        }
    }
}

/// Shape defects of a parsed node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeDefect {
    EmptyOperation,
    NullOperand(Side),
}

impl fmt::Display for TreeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOperation => write!(f, "empty operation"),
            Self::NullOperand(side) => write!(f, "`{side}` operand is null"),
        }
    }
}

/// Typed error category.
///
/// The `Display` impl is the client-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// The body is not valid JSON. Carries the decoder's message verbatim.
    #[error("{detail}")]
    MalformedPayload { detail: String },

    #[error("unexpected data type: {cause}")]
    UnexpectedType { cause: TypeMismatch },

    #[error("wrong data: {cause}")]
    InvalidTree { cause: TreeDefect },

    #[error("unsupported operation: `{symbol}`")]
    UnsupportedOperation { symbol: String },

    #[error("zero division error")]
    DivisionByZero,

    #[error("expression nesting exceeds maximum depth of {limit}")]
    TooDeep { limit: usize },

    #[error("numeric overflow: result of `{symbol}` is not finite")]
    NumericOverflow { symbol: &'static str },
}

impl EvalErrorKind {
    /// Stable machine-readable name, used as a log field.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::UnexpectedType { .. } => "unexpected_type",
            Self::InvalidTree { .. } => "invalid_tree",
            Self::UnsupportedOperation { .. } => "unsupported_operation",
            Self::DivisionByZero => "division_by_zero",
            Self::TooDeep { .. } => "too_deep",
            Self::NumericOverflow { .. } => "numeric_overflow",
        }
    }
}

/// Operand sides walked from the root to the node that raised an error.
///
/// An empty path is the root node itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath(Vec<Side>);

impl NodePath {
    pub fn new(sides: Vec<Side>) -> Self {
        Self(sides)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for side in &self.0 {
            write!(f, ".{side}")?;
        }
        Ok(())
    }
}

/// Evaluation error.
///
/// Displays as its kind only; the node path is diagnostic metadata and never
/// part of the message.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    path: Option<NodePath>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind, path: None }
    }

    /// Where in the tree the error was raised, if known.
    pub fn path(&self) -> Option<&NodePath> {
        self.path.as_ref()
    }

    /// Attach the node path. Keeps an existing path, which is always the
    /// innermost one.
    #[must_use]
    pub fn at_path(mut self, path: impl FnOnce() -> NodePath) -> Self {
        if self.path.is_none() {
            self.path = Some(path());
        }
        self
    }
}

// Decoding

/// The body could not be decoded.
#[cold]
pub fn malformed_payload(detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedPayload {
        detail: detail.into(),
    })
}

// Node shape

#[cold]
pub fn operation_not_string() -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedType {
        cause: TypeMismatch::OperationNotString,
    })
}

#[cold]
pub fn missing_operand(side: Side) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedType {
        cause: TypeMismatch::MissingOperand(side),
    })
}

/// A value in operand position is neither a number nor a node.
#[cold]
pub fn not_an_operand(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnexpectedType {
        cause: TypeMismatch::NotAnOperand { found },
    })
}

#[cold]
pub fn empty_operation() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidTree {
        cause: TreeDefect::EmptyOperation,
    })
}

#[cold]
pub fn null_operand(side: Side) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidTree {
        cause: TreeDefect::NullOperand(side),
    })
}

// Arithmetic

#[cold]
pub fn unsupported_operation(symbol: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperation {
        symbol: symbol.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn numeric_overflow(symbol: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NumericOverflow { symbol })
}

// Resource limits

/// Nesting went past the configured maximum depth.
#[cold]
pub fn too_deep(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooDeep { limit })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
