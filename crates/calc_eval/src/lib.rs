//! Calc Eval - recursive evaluator for JSON arithmetic trees.
//!
//! # Architecture
//!
//! - `parse_node`: checks one mapping's shape and borrows it as an `ExprNode`
//! - `Evaluator`: resolves operands depth-first, left before right, and
//!   applies each node's operation
//! - `apply_operation`: symbol dispatch onto `BinaryOp`
//! - `EvalStack`: node path and depth limit for the walk in progress
//!
//! # Re-exports
//!
//! Value and error types come from `calc_value`.

mod config;
mod evaluator;
mod node;
mod operators;
mod stack;

pub use calc_value::{EvalError, EvalErrorKind, EvalResult, NodePath, Side, Value};

pub use config::{EvalConfig, DEFAULT_MAX_DEPTH};
pub use evaluator::Evaluator;
pub use node::{parse_node, ExprNode};
pub use operators::{apply_operation, evaluate_binary, BinaryOp};
pub use stack::{EvalStack, Frame};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
