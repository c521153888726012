use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::AUTH_USERS_KEY;
use crate::store::adapter::StorageAdapter;
use crate::store::bootstrap::{AuthUser, seed_auth_users};
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::success;

/// Plain credential match against the stored `auth-users` list.
/// No hashing, no lockout: the sign-in screen is a collaborator, not a
/// security boundary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let mut db = SqliteStore::open(&cfg.database)?;

        // The sign-in screen seeds the default credential list on first use.
        seed_auth_users(&mut db)?;

        // A malformed credential list behaves as an empty one.
        let users: Vec<AuthUser> = db
            .load(AUTH_USERS_KEY)?
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();

        let matched = users
            .iter()
            .any(|u| u.email == *email && u.password == *password);

        if !matched {
            return Err(AppError::InvalidCredentials);
        }

        success(format!("Welcome back! Signed in as {}", email));
        audit(cfg, "login", "Sign in", &format!("email={}", email));
    }

    Ok(())
}
