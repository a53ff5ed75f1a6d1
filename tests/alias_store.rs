//! Integration tests for the persisted alias store
//!
//! The store is exercised against a real SQLite file in a temporary
//! directory, including reopening it to verify records survive across
//! connections the way they must survive across process invocations.

use fmext::{AliasStore, Config};
use tempfile::TempDir;

fn temp_config(dir: &TempDir) -> Config {
    Config::with_store_path(dir.path().join(".fmext_aliases.sqlite3"))
}

#[test]
fn test_set_list_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    let alias = store.set("keyTags", "-k:tags").unwrap();
    assert_eq!(alias.run_command, "-k tags");

    let aliases = store.list().unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases[0], alias);
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let config = temp_config(&dir);

    {
        let store = AliasStore::open(&config).unwrap();
        store.set("keyTags", "-k:tags,-v:react").unwrap();
    }

    let store = AliasStore::open(&config).unwrap();
    let aliases = store.list().unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases[0].name, "keyTags");
    assert_eq!(aliases[0].options, "-k:tags,-v:react");
    assert_eq!(aliases[0].run_command, "-k tags -v react");
}

#[test]
fn test_list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    store.set("keyTags", "-k:tags").unwrap();
    store.set("keyValue", "-v:react").unwrap();

    let aliases = store.list().unwrap();
    assert_eq!(aliases[0].name, "keyTags");
    assert_eq!(aliases[0].run_command, "-k tags");
    assert_eq!(aliases[1].name, "keyValue");
    assert_eq!(aliases[1].run_command, "-v react");
}

#[test]
fn test_invalid_options_are_rejected_before_write() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    store.set("good", "-k:tags").unwrap();
    assert!(store.set("bad", "-x:tags").is_err());
    assert!(store.set("alsoBad", "-k:tags,-x:invalid").is_err());

    let aliases = store.list().unwrap();
    assert_eq!(aliases.len(), 1);
    assert_eq!(aliases[0].name, "good");
}

#[test]
fn test_remove_missing_alias_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    let removal = store.remove("neverSet").unwrap();
    assert_eq!(removal.name, "neverSet");
    assert!(!removal.success);
}

#[test]
fn test_remove_then_list() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    store.set("keyTags", "-k:tags").unwrap();
    let removal = store.remove("keyTags").unwrap();
    assert!(removal.success);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_remove_all_clears_store() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    store.set("keyTags", "-k:tags").unwrap();
    store.set("keyValue", "-v:react").unwrap();

    let wipe = store.remove_all().unwrap();
    assert!(wipe.success);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_overwrite_updates_in_place() {
    let dir = TempDir::new().unwrap();
    let store = AliasStore::open(&temp_config(&dir)).unwrap();

    store.set("keyTags", "-k:tags").unwrap();
    store.set("other", "-v:react").unwrap();
    let updated = store.set("keyTags", "--key:topics").unwrap();
    assert_eq!(updated.run_command, "--key topics");

    let aliases = store.list().unwrap();
    assert_eq!(aliases.len(), 2);
    assert_eq!(aliases[0].name, "keyTags");
    assert_eq!(aliases[0].options, "--key:topics");
}
