//! Process configuration resolved from the environment
//!
//! Everything environment-dependent is resolved once at startup into a
//! [`Config`] value that gets passed explicitly into constructors. Nothing
//! else in the crate reads environment variables.

use crate::error::{FmextError, Result};
use std::env;
use std::path::PathBuf;

/// Default file name for the alias store, relative to the home directory.
pub const DEFAULT_STORE_FILE: &str = ".fmext_aliases.sqlite3";

/// Environment variable overriding the alias store file name.
pub const STORE_FILE_ENV: &str = "DB_PATH";

/// Locations and settings resolved from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Full path to the alias store backing file.
    pub alias_store_path: PathBuf,
}

impl Config {
    /// Resolve the configuration from the current environment.
    ///
    /// The alias store lives at `$HOME/<DB_PATH>` where `DB_PATH` defaults
    /// to [`DEFAULT_STORE_FILE`]. `USERPROFILE` stands in for `HOME` on
    /// Windows.
    pub fn from_env() -> Result<Self> {
        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .ok_or(FmextError::MissingHomeDir)?;

        let file = env::var(STORE_FILE_ENV).unwrap_or_else(|_| DEFAULT_STORE_FILE.to_string());

        Ok(Self {
            alias_store_path: PathBuf::from(home).join(file),
        })
    }

    /// Build a configuration with an explicit store path (used by tests).
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            alias_store_path: path.into(),
        }
    }
}
