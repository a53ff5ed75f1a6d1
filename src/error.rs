//! Error types for the fmext library
//!
//! A single error enum covers file I/O, YAML deserialization, alias
//! persistence, and validation failures, with constructor helpers for the
//! structured variants.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FmextError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Alias store backing resource errors
    #[error("alias store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// File not found or invalid path
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Permission errors
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// A filter token that is not of the form `key=value`
    #[error("invalid filter '{token}': expected key=value")]
    InvalidFilter { token: String },

    /// An alias option string containing an unrecognized flag
    #[error("invalid alias options '{options}': unrecognized flag '{flag}'")]
    InvalidAliasOptions { options: String, flag: String },

    /// The environment does not provide a home directory
    #[error("cannot resolve home directory: HOME and USERPROFILE are unset")]
    MissingHomeDir,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FmextError>;

impl FmextError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new invalid filter error
    pub fn invalid_filter(token: impl Into<String>) -> Self {
        Self::InvalidFilter {
            token: token.into(),
        }
    }

    /// Create a new invalid alias options error
    pub fn invalid_alias_options(options: impl Into<String>, flag: impl Into<String>) -> Self {
        Self::InvalidAliasOptions {
            options: options.into(),
            flag: flag.into(),
        }
    }
}
