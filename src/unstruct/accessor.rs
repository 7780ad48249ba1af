//! Field Accessors
//!
//! Dotted-path lookups into untyped JSON documents, returning value-or-error.
//! Numeric fields accept either a raw integer or a capacity quantity string.

use serde_json::Value;

use super::quantity::parse_capacity;
use crate::error::{Error, Result};

/// Walk a dotted field path into a document.
///
/// Fails with `FieldNotFound` if any segment is absent or an intermediate
/// value is not an object.
pub fn lookup<'a>(doc: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current
            .as_object()
            .and_then(|fields| fields.get(segment))
            .ok_or_else(|| Error::FieldNotFound {
                path: path.to_string(),
            })?;
    }
    Ok(current)
}

/// Read a string field at a dotted path.
pub fn string_at(doc: &Value, path: &str) -> Result<String> {
    let value = lookup(doc, path)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::TypeMismatch {
            path: path.to_string(),
            expected: "string",
            found: value_kind(value).to_string(),
        })
}

/// Read a byte-count field at a dotted path.
///
/// The field may be a raw non-negative integer or a quantity string such as
/// "1000Gi"; both forms resolve to a canonical byte count.
pub fn bytes_at(doc: &Value, path: &str) -> Result<u64> {
    let value = lookup(doc, path)?;
    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    if let Some(s) = value.as_str() {
        return parse_capacity(s);
    }
    Err(Error::TypeMismatch {
        path: path.to_string(),
        expected: "integer or quantity string",
        found: value_kind(value).to_string(),
    })
}

/// Human-readable JSON value kind for diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
