//! Persisted alias store
//!
//! Aliases are named shortcuts for bundles of extraction option flags,
//! kept in a single-table SQLite database so they survive across process
//! invocations. A store is opened for the duration of one operation batch
//! and the connection is released when the store is dropped, on every
//! exit path. Nothing here arbitrates concurrent writers; one alias
//! operation runs per invocation.

pub mod options;

pub use options::{expand_options, RECOGNIZED_FLAGS};

use crate::config::Config;
use crate::error::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

/// A stored alias record. Callers always receive copies; the store owns
/// the persisted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    #[serde(rename = "aliasName")]
    pub name: String,
    /// The encoded option string as given, e.g. `-k:tags,-v:react`.
    pub options: String,
    /// The derived invocation form, e.g. `-k tags -v react`.
    pub run_command: String,
}

/// Outcome of removing a single alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRemoval {
    #[serde(rename = "aliasName")]
    pub name: String,
    /// False when no alias of that name existed; not an error.
    pub success: bool,
}

/// Outcome of clearing the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreWipe {
    pub success: bool,
}

/// SQLite-backed mapping from alias name to record.
pub struct AliasStore {
    conn: Connection,
}

impl AliasStore {
    /// Open (creating if necessary) the store at the configured location.
    pub fn open(config: &Config) -> Result<Self> {
        let conn = Connection::open(&config.alias_store_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a throwaway in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS aliases (
                name TEXT PRIMARY KEY,
                options TEXT NOT NULL,
                run_command TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Store an alias, overwriting any existing record of the same name.
    ///
    /// The encoded options are validated before anything is written; an
    /// unrecognized flag rejects the operation and leaves the store
    /// untouched. The upsert is a single statement, so no partial record
    /// can land.
    pub fn set(&self, name: &str, options: &str) -> Result<Alias> {
        let run_command = expand_options(options)?;

        self.conn.execute(
            "INSERT INTO aliases (name, options, run_command) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET
                options = excluded.options,
                run_command = excluded.run_command",
            params![name, options, run_command],
        )?;

        Ok(Alias {
            name: name.to_string(),
            options: options.to_string(),
            run_command,
        })
    }

    /// All stored records in first-insertion order.
    pub fn list(&self) -> Result<Vec<Alias>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, options, run_command FROM aliases ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(Alias {
                name: row.get(0)?,
                options: row.get(1)?,
                run_command: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Delete one alias. Removing a name that was never set reports
    /// `success: false` instead of failing.
    pub fn remove(&self, name: &str) -> Result<AliasRemoval> {
        let affected = self
            .conn
            .execute("DELETE FROM aliases WHERE name = ?1", params![name])?;

        Ok(AliasRemoval {
            name: name.to_string(),
            success: affected > 0,
        })
    }

    /// Delete every record.
    pub fn remove_all(&self) -> Result<StoreWipe> {
        self.conn.execute("DELETE FROM aliases", [])?;
        Ok(StoreWipe { success: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_derive_run_command() {
        let store = AliasStore::in_memory().unwrap();
        let alias = store.set("keyTags", "-k:tags").unwrap();
        assert_eq!(alias.name, "keyTags");
        assert_eq!(alias.options, "-k:tags");
        assert_eq!(alias.run_command, "-k tags");
    }

    #[test]
    fn test_invalid_options_leave_store_unchanged() {
        let store = AliasStore::in_memory().unwrap();
        assert!(store.set("bad", "-x:tags").is_err());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_set_overwrites_same_name() {
        let store = AliasStore::in_memory().unwrap();
        store.set("a", "-k:tags").unwrap();
        store.set("b", "-v:react").unwrap();
        store.set("a", "-k:topics").unwrap();

        let aliases = store.list().unwrap();
        assert_eq!(aliases.len(), 2);
        // Overwriting keeps the record at its original position.
        assert_eq!(aliases[0].name, "a");
        assert_eq!(aliases[0].options, "-k:topics");
        assert_eq!(aliases[1].name, "b");
    }

    #[test]
    fn test_remove_reports_success_flag() {
        let store = AliasStore::in_memory().unwrap();
        store.set("keyTags", "-k:tags").unwrap();

        let removed = store.remove("keyTags").unwrap();
        assert!(removed.success);

        let missing = store.remove("neverSet").unwrap();
        assert!(!missing.success);
        assert_eq!(missing.name, "neverSet");
    }

    #[test]
    fn test_remove_all_always_succeeds() {
        let store = AliasStore::in_memory().unwrap();
        store.set("a", "-k:tags").unwrap();
        assert!(store.remove_all().unwrap().success);
        assert!(store.list().unwrap().is_empty());
        // Clearing an already-empty store still succeeds.
        assert!(store.remove_all().unwrap().success);
    }

    #[test]
    fn test_alias_serialization_shape() {
        let alias = Alias {
            name: "keyTags".into(),
            options: "-k:tags".into(),
            run_command: "-k tags".into(),
        };
        let json = serde_json::to_value(&alias).unwrap();
        assert_eq!(json["aliasName"], "keyTags");
        assert_eq!(json["options"], "-k:tags");
        assert_eq!(json["runCommand"], "-k tags");
    }
}
