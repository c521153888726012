//! SQLite-backed key-value adapter (lightweight for CLI usage).

use crate::errors::AppResult;
use crate::store::adapter::StorageAdapter;
use crate::store::initialize::init_store;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the store file and ensure the schema.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_store(&conn)?;
        Ok(Self { conn })
    }
}

impl StorageAdapter for SqliteStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt.query_row([key], |row| row.get::<_, String>(0)).optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
