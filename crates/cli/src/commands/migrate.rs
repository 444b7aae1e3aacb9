//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! sk-cli migrate
//!
//! # List migrations and whether they are applied
//! sk-cli migrate --status
//! ```
//!
//! # Environment Variables
//!
//! - `STOREKEEPER_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`, then `sqlite://storekeeper.db`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/server/migrations/` and are embedded into the
//! server library, so this binary and the server always agree on the schema.

use std::collections::HashSet;

use secrecy::SecretString;
use sqlx::migrate::Migrate;
use storekeeper_server::config::{ConfigError, ServerConfig};
use storekeeper_server::db::{self, MIGRATOR, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use the explicit URL if given, otherwise the server's configured one.
///
/// # Errors
///
/// Returns `MigrationError::Config` if the environment configuration is invalid.
pub fn resolve_database_url(explicit: Option<String>) -> Result<SecretString, MigrationError> {
    match explicit {
        Some(url) => Ok(SecretString::from(url)),
        None => Ok(ServerConfig::from_env()?.database_url),
    }
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database cannot be opened or a migration fails.
pub async fn run(database_url: &SecretString) -> Result<(), MigrationError> {
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(database_url, 1).await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    pool.close().await;
    Ok(())
}

/// Print every embedded migration with its applied state.
///
/// # Errors
///
/// Returns `MigrationError` if the database cannot be opened or queried.
#[allow(clippy::print_stdout)]
pub async fn status(database_url: &SecretString) -> Result<(), MigrationError> {
    let pool = db::create_pool(database_url, 1).await?;
    let applied = applied_versions(&pool).await?;

    for migration in MIGRATOR.iter() {
        let state = if applied.contains(&migration.version) {
            "applied"
        } else {
            "pending"
        };
        println!("{:>16}  {:<8} {}", migration.version, state, migration.description);
    }

    pool.close().await;
    Ok(())
}

/// Versions recorded as applied in the migrations table.
async fn applied_versions(pool: &sqlx::SqlitePool) -> Result<HashSet<i64>, MigrationError> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let applied = conn.list_applied_migrations().await?;
    Ok(applied.into_iter().map(|m| m.version).collect())
}
