//! Value-frequency counting and cross-document aggregation
//!
//! One [`CountBucket`] is produced per document, optionally scoped to a
//! single key path. Buckets from many documents combine through
//! [`aggregate`], a pointwise sum that is associative and commutative, so
//! document order never affects the final report.

use crate::core::path::KeyPath;
use crate::core::value::scalar_string;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Occurrence counts keyed by canonical value string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountBucket {
    counts: BTreeMap<String, u64>,
}

impl CountBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a value string.
    pub fn record(&mut self, value: impl Into<String>) {
        *self.counts.entry(value.into()).or_insert(0) += 1;
    }

    /// Fold another bucket into this one.
    pub fn merge(&mut self, other: CountBucket) {
        for (value, count) in other.counts {
            *self.counts.entry(value).or_insert(0) += count;
        }
    }

    /// Occurrences recorded for a value string, zero when absent.
    pub fn get(&self, value: &str) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(value, count)| (value.as_str(), *count))
    }
}

/// Count scalar occurrences in one front matter tree.
///
/// With a scope key the resolved sub-value alone is tallied; an
/// unresolvable scope yields an empty bucket. Without one, every
/// top-level mapping entry's value is tallied (values, not keys).
///
/// Tally rule per value: strings count as themselves, numbers and
/// booleans through their canonical string, sequences contribute one
/// count per scalar element (nested sequences and mappings are skipped,
/// not recursed into), and mappings and nulls contribute nothing.
pub fn count_values(tree: &Value, scope: Option<&KeyPath>) -> CountBucket {
    let mut bucket = CountBucket::new();

    match scope {
        Some(path) => {
            if let Some(value) = path.resolve(tree) {
                tally(value, &mut bucket);
            }
        }
        None => {
            if let Value::Mapping(map) = tree {
                for (_key, value) in map {
                    tally(value, &mut bucket);
                }
            }
        }
    }

    bucket
}

fn tally(value: &Value, bucket: &mut CountBucket) {
    match value {
        Value::Sequence(items) => {
            for item in items {
                if let Some(text) = scalar_string(item) {
                    bucket.record(text);
                }
            }
        }
        other => {
            if let Some(text) = scalar_string(other) {
                bucket.record(text);
            }
        }
    }
}

/// Pointwise sum of buckets; the empty input yields an empty bucket.
pub fn aggregate<I>(buckets: I) -> CountBucket
where
    I: IntoIterator<Item = CountBucket>,
{
    let mut total = CountBucket::new();
    for bucket in buckets {
        total.merge(bucket);
    }
    total
}
