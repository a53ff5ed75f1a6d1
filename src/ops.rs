//! Batch operations over document lists
//!
//! Each operation walks a file list in order, parses every document once,
//! and collects per-file failures instead of aborting. One unreadable or
//! malformed document never stops the rest of the batch; the caller
//! inspects [`BatchReport::has_errors`] to decide the overall outcome and
//! whether to report.

use crate::core::{
    count_values, parse_document, passes, CountBucket, FilterCondition, KeyPath,
};
use crate::io::read_to_string;
use log::debug;
use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Extraction result for a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutput {
    pub file: String,
    /// The whole front matter tree, or the sub-value a key path resolved to.
    pub output: Value,
}

/// One document's failure during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub file: PathBuf,
    pub message: String,
}

impl FileError {
    fn new(file: &Path, message: impl Into<String>) -> Self {
        Self {
            file: file.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Results and collected failures of one batch operation.
#[derive(Debug, Clone)]
pub struct BatchReport<T> {
    pub results: Vec<T>,
    pub errors: Vec<FileError>,
}

impl<T> BatchReport<T> {
    fn new() -> Self {
        Self {
            results: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whether any document failed. The batch as a whole fails when at
    /// least one document did, even though processing always ran to the
    /// end of the list.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse one document, recording any failure.
///
/// Returns the front matter tree only for cleanly parsed documents; I/O
/// failures, missing markers, non-mapping blocks, and deserializer errors
/// all land in `errors` with the file they came from.
fn load_front_matter(file: &Path, errors: &mut Vec<FileError>) -> Option<Value> {
    let content = match read_to_string(file) {
        Ok(content) => content,
        Err(err) => {
            errors.push(FileError::new(file, err.to_string()));
            return None;
        }
    };

    let document = parse_document(&content);
    if let Some(message) = document.front_matter.error_message() {
        errors.push(FileError::new(file, message));
        return None;
    }

    document.front_matter.mapping().cloned()
}

/// Select the files whose front matter passes all conditions.
pub fn filter_files(files: &[PathBuf], conditions: &[FilterCondition]) -> BatchReport<PathBuf> {
    let mut report = BatchReport::new();

    for file in files {
        debug!("filtering {}", file.display());
        let Some(tree) = load_front_matter(file, &mut report.errors) else {
            continue;
        };
        if passes(&tree, conditions) {
            report.results.push(file.clone());
        }
    }

    report
}

/// Extract front matter (or one key's sub-value) from each passing file.
///
/// A requested key that does not resolve in an otherwise valid document
/// is a per-file error, not a silent omission. Output order follows the
/// input file order.
pub fn extract_files(
    files: &[PathBuf],
    key: Option<&KeyPath>,
    conditions: &[FilterCondition],
) -> BatchReport<FileOutput> {
    let mut report = BatchReport::new();

    for file in files {
        debug!("extracting from {}", file.display());
        let Some(tree) = load_front_matter(file, &mut report.errors) else {
            continue;
        };
        if !passes(&tree, conditions) {
            continue;
        }

        let output = match key {
            Some(path) if !path.is_root() => match path.resolve(&tree) {
                Some(value) => value.clone(),
                None => {
                    report
                        .errors
                        .push(FileError::new(file, format!("Key '{path}' not found")));
                    continue;
                }
            },
            _ => tree,
        };

        report.results.push(FileOutput {
            file: file.to_string_lossy().into_owned(),
            output,
        });
    }

    report
}

/// Produce one count bucket per passing file.
///
/// Aggregation is left to the caller; buckets merge commutatively so the
/// order they were produced in carries no meaning.
pub fn count_files(
    files: &[PathBuf],
    scope: Option<&KeyPath>,
    conditions: &[FilterCondition],
) -> BatchReport<CountBucket> {
    let mut report = BatchReport::new();

    for file in files {
        debug!("counting {}", file.display());
        let Some(tree) = load_front_matter(file, &mut report.errors) else {
            continue;
        };
        if !passes(&tree, conditions) {
            continue;
        }
        report.results.push(count_values(&tree, scope));
    }

    report
}
