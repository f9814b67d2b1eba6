// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage the SQLite connection pool

use crate::config::Config;
use crate::db::apply_schema;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Initialize SQLite connection pool
/// DOCUMENTATION: Opens (or creates) the database file and applies the schema
/// Called once during application startup in main.rs
/// The returned pool is handed to every service at construction time
pub async fn init_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    log::info!("Initializing database pool: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        // Readers don't block the single writer
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    apply_schema(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
