//! Error payloads shown in the error modal.
//!
//! DESIGN
//! ======
//! Errors reach the page from two places: literal messages raised by the
//! page itself and opaque values thrown by the identity SDK. Both are
//! normalised into `ErrorPayload` and turned into display text by
//! `ErrorPayload::message`, which applies a fixed fallback order:
//!
//! 1. `Text` is shown verbatim.
//! 2. `Fields` with a truthy `error` field shows that field.
//! 3. Otherwise a truthy `message` field.
//! 4. Otherwise every field value, each followed by a line break.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorPayload {
    Text(String),
    Fields(Map<String, Value>),
}

impl ErrorPayload {
    /// Human-readable text for the error modal.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Fields(fields) => {
                if let Some(error) = fields.get("error").filter(|v| is_truthy(v)) {
                    return display_value(error);
                }
                if let Some(message) = fields.get("message").filter(|v| is_truthy(v)) {
                    return display_value(message);
                }
                fields.values().fold(String::new(), |mut out, value| {
                    out.push_str(&display_value(value));
                    out.push('\n');
                    out
                })
            }
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<&str> for ErrorPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ErrorPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for ErrorPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::Fields(fields),
            Value::Array(items) => Self::Fields(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
            ),
            Value::String(text) => Self::Text(text),
            Value::Null => Self::Text(String::new()),
            other => Self::Text(other.to_string()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
