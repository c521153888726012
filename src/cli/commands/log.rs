use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::load_log;
use crate::store::sqlite::SqliteStore;

/// Print rows from the internal `log` table when requested
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let db = SqliteStore::open(&cfg.database)?;

        println!("📜 Internal log:");
        for (id, date, operation, target, message) in load_log(&db.conn)? {
            if target.is_empty() {
                println!("{:>3}: {} | {} | {}", id, date, operation, message);
            } else {
                println!(
                    "{:>3}: {} | {} ({}) | {}",
                    id, date, operation, target, message
                );
            }
        }
    }
    Ok(())
}
