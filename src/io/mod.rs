//! File I/O operations

pub mod fs;

pub use fs::{is_markdown, read_to_string, resolve_files};
