//! Command-line argument definitions
//!
//! Argument parsing stays entirely on the binary side; the library only
//! ever sees key paths, filter conditions, and file lists.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "fmext",
    about = "Extract, filter, and count YAML front matter in markdown files",
    long_about = "fmext parses YAML front matter enclosed in triple-dash markers at the \
                  top of markdown files and outputs it as JSON. Files can be filtered by \
                  key/value conditions, values can be counted across files, and frequently \
                  used option bundles can be stored as named aliases.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage stored option aliases
    Alias(AliasArgs),
    /// Show the version of fmext
    Version,
}

/// Options for the default extraction run
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Extract a specific key from front matter (dot notation reaches nested keys)
    #[arg(short = 'k', long, value_name = "KEY")]
    pub key: Option<String>,

    /// Keep only files where the specified key matches this value
    #[arg(short = 'v', long, value_name = "VALUE", requires = "key")]
    pub value: Option<String>,

    /// Keep only files where KEY matches VALUE (repeat for AND conditions)
    #[arg(
        short = 'f',
        long = "filter",
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        action = ArgAction::Append
    )]
    pub filter: Vec<String>,

    /// Count individual values and array elements across files
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Skip files without front matter silently
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Show detailed processing information
    #[arg(long)]
    pub verbose: bool,

    /// Files or directories to process
    pub files: Vec<PathBuf>,
}

/// Options for the alias subcommand
#[derive(Args, Debug)]
pub struct AliasArgs {
    /// Store an alias under NAME for the encoded OPTIONS, e.g. -k:tags,-v:react
    #[arg(
        short = 's',
        long = "set",
        num_args = 2,
        value_names = ["NAME", "OPTIONS"],
        allow_hyphen_values = true
    )]
    pub set: Vec<String>,

    /// List all stored aliases
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Remove one alias by name
    #[arg(short = 'r', long, value_name = "NAME")]
    pub remove: Option<String>,

    /// Remove every stored alias
    #[arg(long = "remove-all")]
    pub remove_all: bool,
}
