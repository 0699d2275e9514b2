//! JSON round-trip helpers with one shared error surface.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// JsonError
///

#[derive(Debug, ThisError)]
pub enum JsonError {
    #[error("json serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("json deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize `value` to compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize `value` to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Deserialize a value from a JSON string.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Deserialize)
}
