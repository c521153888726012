use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::bootstrap::seed_auth_users;
use crate::store::log::ttlog;
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::info;

/// Initialize config, database schema and the one-time credential seed.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut db = SqliteStore::open(&cfg.database)?;

    if seed_auth_users(&mut db)? {
        info("Default credentials seeded (auth-users)");
    }

    println!("✅ Store initialized at {}", cfg.database);

    if let Err(e) = ttlog(
        &db.conn,
        "init",
        if cli.test { "New DB test" } else { "New prod DB" },
        &format!("Store initialized at {}", cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    Ok(())
}
