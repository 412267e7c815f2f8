//! Tests for the node parser.

use super::json;
use crate::node::parse_node;
use calc_value::{EvalErrorKind, Side, TreeDefect, TypeMismatch, Value};
use pretty_assertions::assert_eq;

fn parse_kind(text: &str) -> EvalErrorKind {
    let value = json(text);
    parse_node(&value).expect_err("parse should fail").kind
}

#[test]
fn parses_flat_node() {
    let value = json(r#"{"operation":"+","left":2,"right":3}"#);
    let node = parse_node(&value).expect("valid node");
    assert_eq!(node.operation, "+");
    assert_eq!(node.left, &Value::Number(2.0));
    assert_eq!(node.operand(Side::Right), &Value::Number(3.0));
}

#[test]
fn nested_operands_are_not_parsed() {
    // The inner node is broken, but the parser never looks inside it.
    let value = json(r#"{"operation":"*","left":{"bogus":true},"right":1}"#);
    let node = parse_node(&value).expect("outer node is well-formed");
    assert!(matches!(node.left, Value::Mapping(_)));
}

#[test]
fn extra_keys_are_ignored() {
    let value = json(r#"{"operation":"-","left":1,"right":2,"comment":"x"}"#);
    assert!(parse_node(&value).is_ok());
}

#[test]
fn missing_operation() {
    assert_eq!(
        parse_kind(r#"{"left":1,"right":2}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::OperationNotString
        }
    );
}

#[test]
fn non_string_operation() {
    assert_eq!(
        parse_kind(r#"{"operation":43,"left":1,"right":2}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::OperationNotString
        }
    );
}

#[test]
fn operation_checked_before_operands() {
    assert_eq!(
        parse_kind(r#"{"operation":null}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::OperationNotString
        }
    );
}

#[test]
fn missing_left_then_right() {
    assert_eq!(
        parse_kind(r#"{"operation":"+","right":2}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::MissingOperand(Side::Left)
        }
    );
    assert_eq!(
        parse_kind(r#"{"operation":"+","left":2}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::MissingOperand(Side::Right)
        }
    );
    assert_eq!(
        parse_kind(r#"{"operation":"+"}"#),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::MissingOperand(Side::Left)
        }
    );
}

#[test]
fn non_mapping_candidate() {
    assert_eq!(
        parse_kind("[1, 2]"),
        EvalErrorKind::UnexpectedType {
            cause: TypeMismatch::NotAnOperand { found: "array" }
        }
    );
}

#[test]
fn null_operand_parses_but_fails_validation() {
    let value = json(r#"{"operation":"+","left":1,"right":null}"#);
    let node = parse_node(&value).expect("key is present");
    assert_eq!(
        node.validate().expect_err("null operand").kind,
        EvalErrorKind::InvalidTree {
            cause: TreeDefect::NullOperand(Side::Right)
        }
    );
}

#[test]
fn empty_operation_fails_validation_first() {
    let value = json(r#"{"operation":"","left":null,"right":null}"#);
    let node = parse_node(&value).expect("shape is fine");
    assert_eq!(
        node.validate().expect_err("empty operation").kind,
        EvalErrorKind::InvalidTree {
            cause: TreeDefect::EmptyOperation
        }
    );
}

#[test]
fn well_formed_node_validates() {
    let value = json(r#"{"operation":"?","left":1,"right":{}}"#);
    let node = parse_node(&value).expect("valid shape");
    assert!(node.validate().is_ok());
}
