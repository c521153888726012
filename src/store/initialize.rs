use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the storage schema.
/// The `kv` table carries the persisted slots (`table-data`,
/// `last-reset-date`, `auth-users`); `log` is the internal audit trail.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
