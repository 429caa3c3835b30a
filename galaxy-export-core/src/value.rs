//! Typed attribute values and the piece-value normalization rule.
//!
//! The client stores each piece of game metadata as a JSON object. Most of
//! those objects wrap a single field (`{"title": "Foo"}`), a few carry real
//! structure (`{"all": 5, "unlocked": 2}`). [`unwrap_singleton`] is the one
//! place that decides which is which.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Number, Value};

use crate::error::SchemaError;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Bool(bool),
}

/// A normalized attribute value attached to a game record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AttrValue {
    /// JSON `null`.
    #[default]
    Absent,
    Scalar(Scalar),
    /// A JSON array, e.g. the release keys under `dlcs`.
    List(Vec<AttrValue>),
    /// An object with two or more fields (or nested objects of any size).
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(s.into()))
    }

    pub fn number(n: impl Into<Number>) -> Self {
        Self::Scalar(Scalar::Number(n.into()))
    }

    /// Python-style truthiness: null, `""`, `0`, `false`, `[]` and `{}` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Scalar(Scalar::Text(s)) => !s.is_empty(),
            Self::Scalar(Scalar::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::Scalar(Scalar::Bool(b)) => *b,
            Self::List(items) => !items.is_empty(),
            Self::Map(fields) => !fields.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Look up a field of a structured value. Non-maps have no fields.
    pub fn field(&self, name: &str) -> Option<&AttrValue> {
        match self {
            Self::Map(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Convert back to JSON, used when a list or map has to be shown as text.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Absent => Value::Null,
            Self::Scalar(Scalar::Text(s)) => Value::String(s.clone()),
            Self::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            Self::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Self::List(items) => Value::Array(items.iter().map(AttrValue::to_json).collect()),
            Self::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::Text(s)),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => {
                Self::Map(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Scalar(Scalar::Text(s)) => f.write_str(s),
            Self::Scalar(Scalar::Number(n)) => write!(f, "{}", n),
            Self::Scalar(Scalar::Bool(b)) => write!(f, "{}", b),
            Self::List(_) | Self::Map(_) => write!(f, "{}", self.to_json()),
        }
    }
}

/// Collapse a stored piece object: exactly one field unwraps to that field's
/// value, anything else stays structured.
///
/// Only applied to the top level of a stored value; nested objects are kept
/// as they are.
pub fn unwrap_singleton(object: Map<String, Value>) -> AttrValue {
    if object.len() == 1 {
        match object.into_iter().next() {
            Some((_, value)) => AttrValue::from(value),
            None => AttrValue::Absent,
        }
    } else {
        AttrValue::from(Value::Object(object))
    }
}

/// Decode the raw JSON text of one `GamePieces.value` cell and normalize it.
pub fn decode_piece_value(
    release_key: &str,
    piece_type: &str,
    raw: &str,
) -> Result<AttrValue, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(|source| SchemaError::Decode {
        release_key: release_key.to_string(),
        piece_type: piece_type.to_string(),
        source,
    })?;

    match value {
        Value::Object(object) => Ok(unwrap_singleton(object)),
        other => Err(SchemaError::NotAnObject {
            release_key: release_key.to_string(),
            piece_type: piece_type.to_string(),
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "tests/value_tests.rs"]
mod tests;
