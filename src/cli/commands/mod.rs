pub mod add;
pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod show;

use crate::errors::AppResult;
use crate::store::record_store::RecordStore;
use crate::store::sqlite::SqliteStore;

/// Open the record store on the configured database. Every command goes
/// through here so the daily reset check runs on each invocation.
pub(crate) fn open_store(cfg: &crate::config::Config) -> AppResult<RecordStore> {
    let db = SqliteStore::open(&cfg.database)?;
    Ok(RecordStore::open(Box::new(db)))
}

/// Best-effort audit entry on a separate connection; never fatal.
pub(crate) fn audit(cfg: &crate::config::Config, operation: &str, target: &str, message: &str) {
    if let Ok(conn) = rusqlite::Connection::open(&cfg.database)
        && let Err(e) = crate::store::log::ttlog(&conn, operation, target, message)
    {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
