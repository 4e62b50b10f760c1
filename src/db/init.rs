//! Database initialization
//!
//! Opens (creating if needed) the embedded SQLite database, applies the
//! connection pragmas, creates the baseline schema and runs migrations.
//! All of it is idempotent, so startup never needs to care whether the
//! database already existed.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Storage codes accepted by the `type` column, mirrored in a CHECK
const DRINK_TYPE_CODES: &str = "'SAKE','BEER','WHISKEY','SHOCHU','WINE','VODKA','GIN','RUM','LIQUEUR'";

/// Initialize database connection and create the schema if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc creates the database file on first run
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL allows concurrent readers while a write is in flight; the engine
    // serializes the writers themselves.
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    // Set busy timeout so a briefly locked database waits instead of erroring
    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create the baseline schema and run migrations (idempotent)
///
/// Split out of [`init_database`] so tests can run it against an
/// in-memory pool.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;
    create_drink_record_table(pool).await?;

    crate::db::migrations::run_migrations(pool).await?;

    Ok(())
}

async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the drink_record table
///
/// Column names match what existing databases hold, so upgrades need no
/// rewrite. `prefecture` holds the stable code (JP-xx), never the display
/// name; dates are ISO-8601 text.
pub async fn create_drink_record_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS drink_record (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ({DRINK_TYPE_CODES})),
            prefecture TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating >= 1 AND rating <= 5),
            photoPath TEXT,
            drinkDate TEXT NOT NULL,
            description TEXT,
            manufacturer TEXT,
            createdAt TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS index_drink_record_prefecture ON drink_record(prefecture)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
