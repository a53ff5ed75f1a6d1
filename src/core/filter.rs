//! Filter conditions and their AND-combined evaluation

use crate::core::matcher::matches_value;
use crate::core::path::KeyPath;
use crate::error::{FmextError, Result};
use serde_yaml::Value;

/// A single key/value condition against one document's front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub key: KeyPath,
    pub value: String,
}

impl FilterCondition {
    pub fn new(key: impl Into<KeyPath>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a condition from a single `key=value` token.
    ///
    /// Only the first `=` splits; the value may itself contain `=`.
    pub fn parse(token: &str) -> Result<Self> {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| FmextError::invalid_filter(token))?;
        if key.is_empty() {
            return Err(FmextError::invalid_filter(token));
        }
        Ok(Self::new(key, value))
    }
}

/// Evaluate AND-combined conditions against one front matter tree.
///
/// An empty condition list is vacuously true. Evaluation short-circuits
/// on the first failing condition; since all conditions must hold, the
/// result does not depend on their order.
pub fn passes(tree: &Value, conditions: &[FilterCondition]) -> bool {
    conditions
        .iter()
        .all(|condition| matches_value(condition.key.resolve(tree), &condition.value))
}
