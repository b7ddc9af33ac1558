//! The backend wraps some payloads (`{"data": ...}`, `{"cart": ...}`,
//! `{"products": [...]}`) and returns others bare.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Unwraps `data`, then `key`, falling back to the bare body.
pub fn unwrap_envelope(value: Value, key: &str) -> Value {
    let value = take_field(value, "data");
    take_field(value, key)
}

/// Unwraps the envelope and decodes the payload.
pub fn decode<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, ApiError> {
    serde_json::from_value(unwrap_envelope(value, key))
        .map_err(|err| ApiError::Decode(format!("Unexpected {} payload: {}", key, err)))
}

fn take_field(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut fields) => match fields.remove(key) {
            Some(inner) if !inner.is_null() => inner,
            _ => Value::Object(fields),
        },
        other => other,
    }
}
