//! Wire representations of the solver engine API.
//!
//! Field names and encodings are fixed by the driver and must not change.
//! Use [`decode`] or [`decode_value`] to parse request bodies so that
//! failures point at the offending field.

pub mod auction;
pub mod error;
pub mod notification;
pub mod quote;
pub mod reveal;
pub mod settle;
pub mod solution;

use serde::de::DeserializeOwned;

/// A payload that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value at {path}: {message}")]
pub struct ValidationError {
    /// Path to the offending field, for example `orders[0].sellAmount`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ValidationError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::new(err.path().to_string(), err.inner().to_string())
    }
}

/// Decodes a JSON document into `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer
        .end()
        .map_err(|err| ValidationError::new(".", err.to_string()))?;
    Ok(value)
}

/// Decodes an already parsed JSON value into `T`.
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ValidationError> {
    Ok(serde_path_to_error::deserialize(value)?)
}
