//! Input boundary for the JSON-encoded registration number payload.
//!
//! The third positional argument arrives as a JSON-encoded array of
//! registration-number strings. It is decoded and validated here, before
//! any lookup runs, so malformed payloads fail fast with a typed error
//! instead of a dynamically-typed value leaking into the resolver.

use serde_json::Value;

/// Errors produced while decoding the registration number payload
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Expected a JSON array of registration numbers, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Registration number at index {index} is not a string (found {found})")]
    NotAString { index: usize, found: &'static str },
}

/// JSON type name used in error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode the raw payload into the ordered list of registration numbers.
///
/// The payload must be a JSON array whose elements are all strings. The
/// strings themselves are passed through verbatim; their format is not
/// validated.
pub fn parse_reg_nums(raw: &str) -> Result<Vec<String>, RequestError> {
    let payload: Value = serde_json::from_str(raw)?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(RequestError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(reg_num) => Ok(reg_num),
            other => Err(RequestError::NotAString {
                index,
                found: json_type_name(&other),
            }),
        })
        .collect()
}
