//! Node parser.
//!
//! Turns one candidate mapping into an [`ExprNode`] that borrows its
//! operation and operands. Nested operands are left untouched; descending
//! into them is the evaluator's job.

use calc_value::{
    empty_operation, missing_operand, not_an_operand, null_operand, operation_not_string,
    EvalError, Mapping, Side, Value,
};

/// One parsed expression node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExprNode<'v> {
    pub operation: &'v str,
    pub left: &'v Value,
    pub right: &'v Value,
}

impl<'v> ExprNode<'v> {
    #[inline]
    pub fn operand(&self, side: Side) -> &'v Value {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Reject nodes with an empty operation or a null operand.
    ///
    /// Checked before either operand is resolved.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.operation.is_empty() {
            return Err(empty_operation());
        }
        for side in [Side::Left, Side::Right] {
            if self.operand(side).is_null() {
                return Err(null_operand(side));
            }
        }
        Ok(())
    }
}

/// Parse a value expected to be an expression node.
///
/// `operation` is checked first, then `left`, then `right`. Extra keys are
/// ignored.
pub fn parse_node(candidate: &Value) -> Result<ExprNode<'_>, EvalError> {
    let Value::Mapping(fields) = candidate else {
        return Err(not_an_operand(candidate.type_name()));
    };
    let Some(Value::String(operation)) = fields.get("operation") else {
        return Err(operation_not_string());
    };
    Ok(ExprNode {
        operation: operation.as_str(),
        left: operand(fields, Side::Left)?,
        right: operand(fields, Side::Right)?,
    })
}

fn operand(fields: &Mapping, side: Side) -> Result<&Value, EvalError> {
    fields.get(side.key()).ok_or_else(|| missing_operand(side))
}
