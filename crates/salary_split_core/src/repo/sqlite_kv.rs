//! SQLite-backed key-value adapter.
//!
//! # Responsibility
//! - Keep the serialized collection in the `kv_entries` table.
//!
//! # Invariants
//! - One row per key; writes upsert (last write wins).
//! - The connection must come from `db::open_db*` so migrations are applied.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::repo::persistence::{PersistResult, PersistenceAdapter};
use rusqlite::{params, Connection, OptionalExtension};

/// Adapter storing one payload under a fixed key.
pub struct SqliteKvAdapter<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteKvAdapter<'conn> {
    /// Uses the default `fields` key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PersistenceAdapter for SqliteKvAdapter<'_> {
    fn read(&self) -> PersistResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, payload: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), payload],
        )?;
        Ok(())
    }
}
