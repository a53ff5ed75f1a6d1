//! File resolution and reading

use crate::error::{FmextError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a path looks like a markdown file.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "md" || ext == "markdown")
        .unwrap_or(false)
}

/// Expand a mix of files and directories into a flat file list.
///
/// Plain files are kept as given; directories are walked recursively and
/// contribute their markdown files. Input order is preserved.
pub fn resolve_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() && is_markdown(entry.path()) {
                    files.push(entry.path().to_owned());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}

/// Read a document's raw text, mapping the common failure kinds.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => FmextError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => FmextError::permission_denied(path),
        _ => FmextError::Io(err),
    })
}
