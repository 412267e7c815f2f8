//! Tree evaluator.
//!
//! Two mutually recursive steps: `resolve_operand` turns a value into a
//! number (directly, or by parsing and evaluating a nested node), and
//! `evaluate_node` validates a node, resolves its operands left to right and
//! applies its operation. Every step returns through `?`, so the first error
//! met in depth-first, left-to-right order is the one reported.

use calc_stack::ensure_sufficient_stack;
use calc_value::{not_an_operand, EvalResult, Side, Value};

use crate::config::EvalConfig;
use crate::node::parse_node;
use crate::operators::apply_operation;
use crate::stack::{EvalStack, Frame};

/// Stateless evaluator; cheap to copy into every request.
#[derive(Copy, Clone, Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub const fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Evaluate a whole payload.
    ///
    /// A bare number is returned as is, without walking anything.
    #[tracing::instrument(level = "debug", skip_all, fields(max_depth = ?self.config.max_depth))]
    pub fn evaluate(&self, root: &Value) -> EvalResult {
        if let Value::Number(n) = root {
            return Ok(*n);
        }
        let mut stack = EvalStack::new(self.config.max_depth);
        let result = self.resolve_operand(root, Frame::Root, &mut stack);
        debug_assert!(stack.is_empty());
        result
    }

    /// Decode a JSON document and evaluate it.
    pub fn evaluate_json(&self, bytes: &[u8]) -> EvalResult {
        let root = Value::from_json(bytes)?;
        self.evaluate(&root)
    }

    fn resolve_operand(&self, value: &Value, frame: Frame, stack: &mut EvalStack) -> EvalResult {
        match value {
            Value::Number(n) => Ok(*n),
            Value::Mapping(_) => {
                if let Err(err) = stack.push(frame) {
                    return Err(stack.attach_path(err));
                }
                let result = ensure_sufficient_stack(|| self.evaluate_node(value, stack))
                    .map_err(|err| stack.attach_path(err));
                stack.pop();
                result
            }
            Value::String(_) | Value::Null | Value::Other(_) => {
                Err(not_an_operand(value.type_name()))
            }
        }
    }

    fn evaluate_node(&self, candidate: &Value, stack: &mut EvalStack) -> EvalResult {
        let node = parse_node(candidate)?;
        node.validate()?;
        tracing::trace!(operation = node.operation, depth = stack.depth(), "evaluating node");

        let left = self.resolve_operand(node.left, Frame::Operand(Side::Left), stack)?;
        let right = self.resolve_operand(node.right, Frame::Operand(Side::Right), stack)?;
        apply_operation(node.operation, left, right)
    }
}
