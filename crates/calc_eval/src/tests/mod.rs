//! Unit tests for node parsing, operation dispatch and evaluation.

mod node_tests;

use calc_value::{Mapping, Value};

/// Decode a JSON literal, panicking on malformed test input.
pub(crate) fn json(text: &str) -> Value {
    match Value::from_json(text.as_bytes()) {
        Ok(value) => value,
        Err(err) => panic!("bad test JSON {text:?}: {err}"),
    }
}

/// Build a node mapping directly, bypassing the decoder's nesting limit.
pub(crate) fn node(operation: &str, left: Value, right: Value) -> Value {
    let mut fields = Mapping::default();
    fields.insert("operation".to_string(), Value::String(operation.to_string()));
    fields.insert("left".to_string(), left);
    fields.insert("right".to_string(), right);
    Value::from(fields)
}

/// Drop a tree without recursing once per level.
pub(crate) fn dismantle(value: Value) {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        if let Value::Mapping(mut fields) = value {
            pending.extend(fields.drain().map(|(_, v)| v));
        }
    }
}
