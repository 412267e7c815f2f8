//! Property-based tests for tree evaluation.
//!
//! Random trees of `+ - * /` over small integers are rendered to JSON and
//! evaluated, then checked against a direct recursive computation:
//! 1. Correctness: the evaluator agrees with the reference result
//! 2. Idempotence: evaluating the same payload twice gives the same outcome
//! 3. Key order: the order of keys inside a node does not matter

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use calc_eval::{EvalErrorKind, Evaluator};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Tree {
    Leaf(i32),
    Node(&'static str, Box<Tree>, Box<Tree>),
}

impl Tree {
    /// Reference semantics: `None` wherever the evaluator must fail.
    #[allow(clippy::float_cmp, reason = "exact zero divisor check")]
    fn expected(&self) -> Option<f64> {
        match self {
            Tree::Leaf(n) => Some(f64::from(*n)),
            Tree::Node(op, left, right) => {
                let l = left.expected()?;
                let r = right.expected()?;
                let result = match *op {
                    "+" => l + r,
                    "-" => l - r,
                    "*" => l * r,
                    "/" if r == 0.0 => return None,
                    "/" => l / r,
                    _ => unreachable!("strategy only produces four operators"),
                };
                result.is_finite().then_some(result)
            }
        }
    }

    fn to_json(&self, reversed_keys: bool) -> String {
        match self {
            Tree::Leaf(n) => n.to_string(),
            Tree::Node(op, left, right) => {
                let left = left.to_json(reversed_keys);
                let right = right.to_json(reversed_keys);
                if reversed_keys {
                    format!(r#"{{"right":{right},"left":{left},"operation":"{op}"}}"#)
                } else {
                    format!(r#"{{"operation":"{op}","left":{left},"right":{right}}}"#)
                }
            }
        }
    }
}

// -- Strategies --

fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = (-1000i32..1000).prop_map(Tree::Leaf);
    leaf.prop_recursive(6, 64, 2, |inner| {
        (
            prop::sample::select(vec!["+", "-", "*", "/"]),
            inner.clone(),
            inner,
        )
            .prop_map(|(op, left, right)| Tree::Node(op, Box::new(left), Box::new(right)))
    })
}

proptest! {
    #[test]
    fn matches_reference(tree in tree_strategy()) {
        let outcome = Evaluator::default().evaluate_json(tree.to_json(false).as_bytes());
        match tree.expected() {
            Some(expected) => prop_assert_eq!(outcome, Ok(expected)),
            None => prop_assert_eq!(
                outcome.expect_err("reference says this fails").kind,
                EvalErrorKind::DivisionByZero
            ),
        }
    }

    #[test]
    fn idempotent(tree in tree_strategy()) {
        let evaluator = Evaluator::default();
        let payload = tree.to_json(false);
        let first = evaluator.evaluate_json(payload.as_bytes());
        let second = evaluator.evaluate_json(payload.as_bytes());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn key_order_is_irrelevant(tree in tree_strategy()) {
        let evaluator = Evaluator::default();
        prop_assert_eq!(
            evaluator.evaluate_json(tree.to_json(false).as_bytes()),
            evaluator.evaluate_json(tree.to_json(true).as_bytes())
        );
    }

    #[test]
    fn bare_integer_is_itself(n in -1_000_000_000_000_000i64..1_000_000_000_000_000) {
        #[allow(clippy::cast_precision_loss, reason = "range is exactly representable")]
        let expected = n as f64;
        prop_assert_eq!(
            Evaluator::default().evaluate_json(n.to_string().as_bytes()),
            Ok(expected)
        );
    }
}
