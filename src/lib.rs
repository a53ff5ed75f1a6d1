//! fmext: a library for extracting, filtering, and counting YAML front matter
//!
//! This library locates front matter blocks delimited by triple-dash
//! markers at the top of text documents, resolves dot-separated key paths
//! into the deserialized value tree, filters documents by key/value
//! conditions, and aggregates value-frequency counts across many
//! documents. A small SQLite-backed store persists named option aliases
//! between invocations.
//!
//! # Features
//!
//! - **Precise boundary parsing** with distinct outcomes for missing
//!   markers, non-mapping blocks, and deserializer failures; the document
//!   body is preserved on every path
//! - **Dot-path key resolution** into nested mappings, total and
//!   non-panicking
//! - **Coercing value matching** so numbers and booleans compare against
//!   their canonical string form
//! - **AND-combined filtering** across any number of conditions
//! - **Commutative count aggregation**, safe for any processing order
//! - **Batch processing** that collects per-file errors without aborting
//! - **Persisted aliases** with validated option encodings
//!
//! # Quick Start
//!
//! ## Parsing and key access
//!
//! ```rust
//! use fmext::{parse_document, KeyPath};
//!
//! let doc = parse_document("---\ntitle: Hello\ntags: [a, b]\n---\n# Body\n");
//! let tree = doc.front_matter.mapping().expect("front matter present");
//!
//! let title = KeyPath::parse("title").resolve(tree);
//! assert_eq!(title.and_then(|v| v.as_str()), Some("Hello"));
//! assert_eq!(doc.body, "# Body\n");
//! ```
//!
//! ## Filtering and counting
//!
//! ```rust
//! use fmext::{aggregate, count_values, parse_document, passes, FilterCondition};
//!
//! let doc = parse_document("---\npublished: true\ntags: [react, web]\n---\n");
//! let tree = doc.front_matter.mapping().unwrap();
//!
//! let conditions = vec![FilterCondition::new("published", "true")];
//! assert!(passes(tree, &conditions));
//!
//! let bucket = count_values(tree, None);
//! let total = aggregate(vec![bucket]);
//! assert_eq!(total.get("react"), 1);
//! ```
//!
//! ## Batch operations
//!
//! ```rust,no_run
//! use fmext::ops::extract_files;
//! use fmext::{resolve_files, KeyPath};
//! use std::path::PathBuf;
//!
//! let files = resolve_files(&[PathBuf::from("docs/")]);
//! let key = KeyPath::parse("title");
//! let report = extract_files(&files, Some(&key), &[]);
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! ```
//!
//! ## Persisted aliases
//!
//! ```rust,no_run
//! use fmext::{AliasStore, Config, Result};
//!
//! fn main() -> Result<()> {
//!     let config = Config::from_env()?;
//!     let store = AliasStore::open(&config)?;
//!     let alias = store.set("keyTags", "-k:tags")?;
//!     assert_eq!(alias.run_command, "-k tags");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`crate::core`]: value helpers, boundary parsing, key paths,
//!   matching, filtering, counting
//! - [`ops`]: batch operations over file lists with error collection
//! - [`io`]: file resolution and reading
//! - [`alias`]: the persisted alias store
//! - [`config`]: environment-resolved locations
//! - [`error`]: the crate error type

// Public API exports
pub use error::{FmextError, Result};

// Core types
pub use crate::core::{
    aggregate, count_values, matches_value, parse_document, passes, CountBucket, FilterCondition,
    FrontMatter, KeyPath, ParsedDocument,
};

// Alias store
pub use alias::{Alias, AliasRemoval, AliasStore, StoreWipe};

// Configuration
pub use config::Config;

// IO helpers
pub use io::{is_markdown, read_to_string, resolve_files};

// Internal modules
pub mod alias;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod ops;

// CLI components are available only in the binary, not as part of the library API
