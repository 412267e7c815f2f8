//! Untyped payload value.
//!
//! Decoded straight from JSON through a serde visitor, so no intermediate
//! `serde_json::Value` is built. Only the shapes the evaluator distinguishes
//! survive decoding: numbers, strings, mappings and null keep their content,
//! booleans and arrays collapse to an [`OtherKind`] tag.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::errors::{malformed_payload, EvalError};

/// Keys of a JSON object mapped to their decoded values.
pub type Mapping = FxHashMap<String, Value>;

/// Shapes that can never be an operand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OtherKind {
    Boolean,
    Array,
}

impl OtherKind {
    pub const fn type_name(self) -> &'static str {
        match self {
            OtherKind::Boolean => "boolean",
            OtherKind::Array => "array",
        }
    }
}

/// A decoded request payload, or any part of one.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    /// Only meaningful as a node's `operation` symbol.
    String(String),
    /// Candidate expression node.
    Mapping(Mapping),
    Null,
    Other(OtherKind),
}

impl Value {
    /// Decode a JSON document.
    ///
    /// Decoder failures become `MalformedPayload` carrying the decoder's
    /// message unchanged.
    pub fn from_json(bytes: &[u8]) -> Result<Self, EvalError> {
        serde_json::from_slice(bytes).map_err(|e| malformed_payload(e.to_string()))
    }

    /// Name of this value's shape, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Mapping(_) => "object",
            Value::Null => "null",
            Value::Other(kind) => kind.type_name(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Value, E> {
        Ok(Value::Other(OtherKind::Boolean))
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "payload numbers are f64 in the data model"
    )]
    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "payload numbers are f64 in the data model"
    )]
    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Elements still have to be consumed for the document to be valid.
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Value::Other(OtherKind::Array))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Mapping::default();
        // Later duplicates overwrite earlier ones.
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Mapping(entries))
    }
}
