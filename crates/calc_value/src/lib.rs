//! Calc Value - payload values and evaluation errors.
//!
//! A request body decodes into a [`Value`], a closed sum type the evaluator
//! matches exhaustively. Everything that can go wrong between the wire bytes
//! and the final number is an [`EvalError`], built through the factory
//! functions re-exported here so every message lives in one place.

mod errors;
mod value;

pub use errors::{
    division_by_zero, empty_operation, malformed_payload, missing_operand, not_an_operand,
    null_operand, numeric_overflow, operation_not_string, too_deep, unsupported_operation,
    EvalError, EvalErrorKind, EvalResult, NodePath, Side, TreeDefect, TypeMismatch,
};
pub use value::{Mapping, OtherKind, Value};
