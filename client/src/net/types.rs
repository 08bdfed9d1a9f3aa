//! Response payloads of the `/greet` REST endpoints.
//!
//! DESIGN
//! ======
//! The server contract is loose JSON, so decoding is tolerant: a payload that
//! does not carry the expected field decodes to `None` and the caller decides
//! how to surface it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /greet/greeting` and `PUT /greet/greeting/{value}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingPayload {
    pub greeting: String,
}

impl GreetingPayload {
    /// Decode a greeting payload.
    ///
    /// Returns `None` for an empty payload (`null`, `""`, `[]`) and for any
    /// object whose `greeting` field is missing or not a string.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let greeting = value.as_object()?.get("greeting")?.as_str()?;
        Some(Self { greeting: greeting.to_owned() })
    }
}

/// Body of `GET /greet` and `GET /greet/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let message = value.as_object()?.get("message")?.as_str()?;
        Some(Self { message: message.to_owned() })
    }
}

/// True when a response carries nothing at all.
#[must_use]
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
