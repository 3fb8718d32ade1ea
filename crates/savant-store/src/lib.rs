//! Savant Storage Layer
//!
//! Implements the [`LibraryStore`] trait: a flat keyed collection, not a
//! database design. Two backends:
//!
//! - [`SqliteStore`]: a single key/value table in SQLite, the persistent
//!   equivalent of the browser-local storage the original app used
//! - [`MemoryStore`]: shared in-memory map for tests
//!
//! # Examples
//!
//! ```no_run
//! use savant_store::SqliteStore;
//!
//! let store = SqliteStore::new("savant.db").unwrap();
//! // Hand the store to Library::hydrate
//! ```

#![warn(missing_docs)]

use savant_domain::traits::LibraryStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Lock poisoned (memory store)
    #[error("store lock poisoned")]
    Poisoned,
}

/// SQLite-backed key/value store.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }
}

impl LibraryStore for SqliteStore {
    type Error = StoreError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory key/value store for tests.
///
/// Clones share the same backing map, so a test can hand a clone to a
/// library and inspect writes through the original handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LibraryStore for MemoryStore {
    type Error = StoreError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
