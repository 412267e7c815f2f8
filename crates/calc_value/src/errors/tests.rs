use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_match_wire_text() {
    assert_eq!(division_by_zero().to_string(), "zero division error");
    assert_eq!(
        unsupported_operation("^").to_string(),
        "unsupported operation: `^`"
    );
    assert_eq!(
        operation_not_string().to_string(),
        "unexpected data type: `operation` must be a string"
    );
    assert_eq!(
        missing_operand(Side::Right).to_string(),
        "unexpected data type: missing `right` operand"
    );
    assert_eq!(
        not_an_operand("string").to_string(),
        "unexpected data type: expected a number or an expression node, got string"
    );
    assert_eq!(empty_operation().to_string(), "wrong data: empty operation");
    assert_eq!(
        null_operand(Side::Left).to_string(),
        "wrong data: `left` operand is null"
    );
    assert_eq!(
        too_deep(8).to_string(),
        "expression nesting exceeds maximum depth of 8"
    );
    assert_eq!(
        numeric_overflow("*").to_string(),
        "numeric overflow: result of `*` is not finite"
    );
}

#[test]
fn malformed_payload_is_verbatim() {
    let err = malformed_payload("EOF while parsing a value at line 1 column 0");
    assert_eq!(err.to_string(), "EOF while parsing a value at line 1 column 0");
    assert_eq!(err.kind.code(), "malformed_payload");
}

#[test]
fn missing_operand_causes_are_distinct() {
    let left = missing_operand(Side::Left);
    let right = missing_operand(Side::Right);
    assert_eq!(left.kind.code(), right.kind.code());
    assert!(left.kind != right.kind);
    assert!(left.kind != operation_not_string().kind);
}

#[test]
fn path_is_not_part_of_message() {
    let err = division_by_zero().at_path(|| NodePath::new(vec![Side::Left, Side::Right]));
    assert_eq!(err.to_string(), "zero division error");
    assert_eq!(err.path().map(ToString::to_string), Some("$.left.right".to_string()));
}

#[test]
fn innermost_path_is_kept() {
    let err = division_by_zero()
        .at_path(|| NodePath::new(vec![Side::Right]))
        .at_path(NodePath::default);
    assert_eq!(err.path(), Some(&NodePath::new(vec![Side::Right])));
}

#[test]
fn root_path_display() {
    let path = NodePath::default();
    assert!(path.is_root());
    assert_eq!(path.to_string(), "$");
}
