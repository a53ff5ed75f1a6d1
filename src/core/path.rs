//! Dot-separated key paths into nested front matter
//!
//! A key path addresses a value inside nested mappings, e.g.
//! `metadata.author`. There is no escaping for literal dots and no
//! wildcard or index syntax; segments match mapping keys exactly and
//! case-sensitively. The empty string parses to the root path, which
//! addresses the whole tree.

use serde_yaml::Value;
use std::fmt;

/// An ordered sequence of path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The root path, addressing the whole tree.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a dot-separated path. The empty string yields the root path.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::new();
        }
        Self {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// Build a path from pre-split segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walk this path through a value tree.
    ///
    /// The root path returns the tree itself. Every step requires the
    /// current value to be a mapping; a missing key, a null, or any
    /// non-mapping value encountered before the path is exhausted yields
    /// `None`. Resolution never fails in any other way.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            match current {
                Value::Mapping(map) => {
                    current = map.get(&Value::String(segment.clone()))?;
                }
                _ => return None,
            }
        }
        Some(current)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for KeyPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}
