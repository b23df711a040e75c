//! Key-value storage media.

use crate::db::{open_db, open_db_in_memory};
use crate::persist::{PersistError, PersistResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Synchronous key-value medium holding JSON values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn load(&self, key: &str) -> PersistResult<Option<Value>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &Value) -> PersistResult<()>;
}

/// Process-local medium, mainly for tests and ephemeral sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryKeyValueStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> PersistResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> PersistResult<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// SQLite-backed medium storing JSON text in `kv_entries`.
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> PersistResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn load(&self, key: &str) -> PersistResult<Option<Value>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        match text {
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|err| {
                PersistError::InvalidData(format!("kv_entries.value for `{key}` is not JSON: {err}"))
            }),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, value: &Value) -> PersistResult<()> {
        let text = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, text],
        )?;
        Ok(())
    }
}
