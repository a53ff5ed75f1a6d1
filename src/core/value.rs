//! Helpers over the YAML value tree
//!
//! Front matter deserializes into `serde_yaml::Value`, a tagged union of
//! null, booleans, numbers, strings, sequences, and mappings. The matcher
//! and the counter both compare values through the canonical scalar string
//! defined here, so `42` and `"42"` agree everywhere.

use serde_yaml::Value;

/// Canonical string form of a scalar value.
///
/// Strings are returned as-is, numbers and booleans through their display
/// form. Null, sequences, mappings, and tagged values have no scalar form
/// and yield `None`.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Whether a value has a canonical scalar form.
pub fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}
