//! Error types for building a document from JSON.
//!
//! Navigation never fails; only turning input into a root object can.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while constructing a [`crate::Document`].
#[derive(Error, Debug)]
pub enum TysonError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input was valid JSON, but its top level is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl TysonError {
    pub(crate) fn not_an_object(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        TysonError::NotAnObject { found }
    }
}

/// Convenience alias used throughout tyson.
pub type Result<T> = std::result::Result<T, TysonError>;
