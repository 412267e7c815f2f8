//! Operation dispatch.
//!
//! The operator set is closed, so dispatch is a plain match on [`BinaryOp`].

use calc_value::{division_by_zero, numeric_overflow, unsupported_operation, EvalResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// Apply `op` to two resolved operands.
///
/// Division by exactly zero (either sign) is an error. A result that is not
/// finite is reported as overflow.
#[allow(clippy::float_cmp, reason = "only an exact zero divisor is rejected")]
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> EvalResult {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => {
            if right == 0.0 {
                return Err(division_by_zero());
            }
            left / right
        }
    };
    if result.is_finite() {
        Ok(result)
    } else {
        Err(numeric_overflow(op.as_symbol()))
    }
}

/// Look up `symbol` and apply it.
pub fn apply_operation(symbol: &str, left: f64, right: f64) -> EvalResult {
    let op = BinaryOp::from_symbol(symbol).ok_or_else(|| unsupported_operation(symbol))?;
    evaluate_binary(op, left, right)
}
