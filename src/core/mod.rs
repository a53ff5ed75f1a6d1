//! Core types and domain logic for front matter extraction

pub mod count;
pub mod filter;
pub mod front_matter;
pub mod matcher;
pub mod path;
pub mod value;

pub use count::{aggregate, count_values, CountBucket};
pub use filter::{passes, FilterCondition};
pub use front_matter::{parse_document, FrontMatter, ParsedDocument};
pub use matcher::matches_value;
pub use path::KeyPath;
