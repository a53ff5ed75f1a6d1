//! Value matching against a target string
//!
//! Filtering compares a resolved value with a caller-supplied string.
//! Scalars compare through their canonical string form, sequences match
//! when any scalar element does. Mappings never match.

use crate::core::value::scalar_string;
use serde_yaml::Value;

/// Decide whether a resolved value equals or contains the target string.
///
/// Total over the value domain:
/// - `None` (unresolved) and `Null` are false, even for the target `"null"`.
/// - Strings compare exactly, case-sensitively, without trimming.
/// - Numbers and booleans compare through their canonical string form,
///   so `42` matches `"42"` and `true` matches `"true"`.
/// - Sequences match when at least one String/Number/Bool element matches;
///   nested sequences and mappings inside the list never do.
/// - Mappings and tagged values are never a match.
pub fn matches_value(value: Option<&Value>, target: &str) -> bool {
    let Some(value) = value else {
        return false;
    };

    match value {
        Value::Sequence(items) => items
            .iter()
            .any(|item| scalar_string(item).as_deref() == Some(target)),
        Value::Null | Value::Mapping(_) | Value::Tagged(_) => false,
        scalar => scalar_string(scalar).as_deref() == Some(target),
    }
}
