//! Encoded option validation and expansion
//!
//! An alias stores its options as a comma-separated list of `flag:value`
//! tokens, e.g. `-k:tags,-v:react`. Only the extraction flags may appear;
//! anything else rejects the whole string before the store is touched.

use crate::error::{FmextError, Result};

/// The option flags an alias may bundle.
pub const RECOGNIZED_FLAGS: &[&str] = &["-k", "-v", "-f", "--key", "--value", "--filter"];

/// Validate an encoded option string and derive its invocation form.
///
/// Each `flag:value` token becomes `flag value`; tokens join with single
/// spaces, so `-k:tags,-v:react` expands to `-k tags -v react`. A token
/// without a `:` is accepted as a bare flag. The first unrecognized flag
/// fails the whole string.
pub fn expand_options(encoded: &str) -> Result<String> {
    let mut parts: Vec<&str> = Vec::new();

    for token in encoded.split(',') {
        let (flag, value) = match token.split_once(':') {
            Some((flag, value)) => (flag, Some(value)),
            None => (token, None),
        };

        if !RECOGNIZED_FLAGS.contains(&flag) {
            return Err(FmextError::invalid_alias_options(encoded, flag));
        }

        parts.push(flag);
        if let Some(value) = value {
            parts.push(value);
        }
    }

    Ok(parts.join(" "))
}
