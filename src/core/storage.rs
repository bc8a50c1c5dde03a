//! SQLite-backed key/value persistence.
//!
//! The store mirrors the shape of the web version's `localStorage`: a single
//! table of string keys to string values. One primary key holds the whole
//! record-list blob; timestamped secondary keys hold backup snapshots.

use crate::Result;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Validate database structure
        let table_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )?;

        if table_count != 1 {
            return Err(crate::MaktabatiError::InvalidLibrary(
                "Not a valid Maktabati database".to_string(),
            ));
        }

        Ok(Self { conn })
    }

    /// Opens a transient in-memory store. Used by tests and previews.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?", [key])?;
        Ok(())
    }

    /// Returns all keys starting with `prefix`, in ascending key order.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}%", prefix.replace('%', "\\%").replace('_', "\\_"));
        let mut stmt = self.conn.prepare(
            "SELECT key FROM kv_store WHERE key LIKE ? ESCAPE '\\' ORDER BY key ASC",
        )?;
        let keys = stmt
            .query_map([pattern], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}
