//! Extraction of discovered strings from a decoded JSON body.
//!
//! The only accepted shape is a flat array of strings. A bare string, an
//! object, a number or an array containing a non-string element is a
//! [`FetchError::Shape`] failure.

use crate::core::error::FetchError;
use serde_json::Value;
use std::collections::HashSet;

/// Turn a decoded body into the set of strings it lists
pub fn extract_strings(value: Value) -> Result<HashSet<String>, FetchError> {
    let Value::Array(items) = value else {
        return Err(FetchError::Shape(format!(
            "expected an array of strings, got {}",
            json_type_name(&value)
        )));
    };

    let mut found = HashSet::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::String(s) => {
                found.insert(s);
            }
            other => {
                return Err(FetchError::Shape(format!(
                    "element {} is {}, expected a string",
                    index,
                    json_type_name(&other)
                )));
            }
        }
    }
    Ok(found)
}

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
