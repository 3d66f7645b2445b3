//! Top-level shape check for parsed model answers.
//!
//! Only the outer shape is enforced. Elements of a search result missing
//! fields are passed through untouched.

use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use super::prompt::PromptKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Array,
    Object,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => f.write_str("array"),
            Shape::Object => f.write_str("object"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected a JSON {expected}, got {}", json_type(.value))]
pub struct ShapeError {
    pub expected: Shape,
    /// The parsed value that failed the check, kept for logging
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedPayload {
    Matches(Vec<Value>),
    Analysis(Map<String, Value>),
}

impl ValidatedPayload {
    pub fn into_value(self) -> Value {
        match self {
            ValidatedPayload::Matches(items) => Value::Array(items),
            ValidatedPayload::Analysis(map) => Value::Object(map),
        }
    }
}

pub fn validate(kind: PromptKind, value: Value) -> Result<ValidatedPayload, ShapeError> {
    match (kind.expected_shape(), value) {
        (Shape::Array, Value::Array(items)) => {
            let unnamed = items
                .iter()
                .filter(|item| item.get("name").and_then(Value::as_str).is_none())
                .count();
            if unnamed > 0 {
                tracing::debug!(unnamed, total = items.len(), "Search matches without a name");
            }
            Ok(ValidatedPayload::Matches(items))
        }
        (Shape::Object, Value::Object(map)) => Ok(ValidatedPayload::Analysis(map)),
        (expected, value) => Err(ShapeError { expected, value }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
