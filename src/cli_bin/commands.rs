//! CLI command handlers that bridge arguments to library operations
//!
//! Handlers translate parsed arguments into engine calls, shape the JSON
//! output, and decide reporting and exit-code policy. The engine itself
//! never prints and never suppresses an error; quietness is decided here.

use crate::cli_bin::args::{AliasArgs, Cli, ExtractArgs};
use anyhow::Result;
use clap::CommandFactory;
use log::{debug, warn};

use fmext::ops::{count_files, extract_files, filter_files, FileError};
use fmext::{aggregate, resolve_files, AliasStore, Config, FilterCondition, KeyPath};

/// Execute the default extraction run. Returns whether any per-file
/// error occurred; processing always covers the whole file list.
pub fn extract_command(args: ExtractArgs) -> Result<bool> {
    debug!("extraction args: {args:?}");

    let files = resolve_files(&args.files);
    if files.is_empty() {
        warn!("no files to process");
        return Ok(false);
    }

    let key = args.key.as_deref().map(KeyPath::parse);
    let conditions = build_conditions(&args);

    // Count mode: one aggregated bucket across all passing files.
    if args.count {
        let report = count_files(&files, key.as_ref(), &conditions);
        report_file_errors(&report.errors, args.silent);
        let had_errors = report.has_errors();

        if !report.results.is_empty() {
            let total = aggregate(report.results);
            let payload = if total.is_empty() {
                serde_json::json!([])
            } else {
                serde_json::json!([total])
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        return Ok(had_errors);
    }

    // Filter mode: only matching file paths, one per line.
    if args.value.is_some() {
        let report = filter_files(&files, &conditions);
        report_file_errors(&report.errors, args.silent);
        for file in &report.results {
            println!("{}", file.display());
        }
        return Ok(report.has_errors());
    }

    // Extraction mode: per-file front matter or one key's sub-value.
    let report = extract_files(&files, key.as_ref(), &conditions);
    report_file_errors(&report.errors, args.silent);
    if !report.results.is_empty() {
        println!("{}", serde_json::to_string_pretty(&report.results)?);
    }
    Ok(report.has_errors())
}

/// Execute an alias management operation against the configured store.
pub fn alias_command(args: AliasArgs, config: &Config) -> Result<()> {
    let store = AliasStore::open(config)?;

    if args.set.len() == 2 {
        let alias = store.set(&args.set[0], &args.set[1])?;
        println!("{}", serde_json::to_string(&alias)?);
    } else if args.list {
        let aliases = store.list()?;
        println!("{}", serde_json::to_string(&aliases)?);
    } else if let Some(name) = &args.remove {
        let removal = store.remove(name)?;
        println!("{}", serde_json::to_string(&removal)?);
    } else if args.remove_all {
        let wipe = store.remove_all()?;
        println!("{}", serde_json::to_string(&wipe)?);
    } else {
        let mut command = Cli::command();
        if let Some(alias_cmd) = command.find_subcommand_mut("alias") {
            alias_cmd.print_help()?;
        }
    }

    Ok(())
}

/// Print the crate version in the `v<semver>` form.
pub fn version_command() {
    println!("v{}", env!("CARGO_PKG_VERSION"));
}

/// Combine repeated `--filter KEY VALUE` pairs with the `--key`/`--value`
/// shorthand into one AND-combined condition list.
fn build_conditions(args: &ExtractArgs) -> Vec<FilterCondition> {
    let mut conditions: Vec<FilterCondition> = args
        .filter
        .chunks(2)
        .filter(|pair| pair.len() == 2)
        .map(|pair| FilterCondition::new(pair[0].as_str(), pair[1].as_str()))
        .collect();

    if let (Some(key), Some(value)) = (&args.key, &args.value) {
        conditions.push(FilterCondition::new(key.as_str(), value.as_str()));
    }

    conditions
}

fn report_file_errors(errors: &[FileError], silent: bool) {
    if silent {
        return;
    }
    for error in errors {
        eprintln!("{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_args(key: Option<&str>, value: Option<&str>, filter: &[&str]) -> ExtractArgs {
        ExtractArgs {
            key: key.map(String::from),
            value: value.map(String::from),
            filter: filter.iter().map(|s| s.to_string()).collect(),
            count: false,
            silent: false,
            verbose: false,
            files: Vec::new(),
        }
    }

    #[test]
    fn test_build_conditions_from_filters() {
        let args = extract_args(None, None, &["published", "true", "type", "tech"]);
        let conditions = build_conditions(&args);
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0], FilterCondition::new("published", "true"));
        assert_eq!(conditions[1], FilterCondition::new("type", "tech"));
    }

    #[test]
    fn test_key_value_shorthand_becomes_condition() {
        let args = extract_args(Some("topic"), Some("react"), &[]);
        let conditions = build_conditions(&args);
        assert_eq!(conditions, vec![FilterCondition::new("topic", "react")]);
    }

    #[test]
    fn test_key_without_value_is_not_a_condition() {
        let args = extract_args(Some("topic"), None, &[]);
        assert!(build_conditions(&args).is_empty());
    }
}
