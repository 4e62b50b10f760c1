//! Database schema migrations
//!
//! Versioned migrations tracked in the `schema_version` table. Migrations
//! never modify once shipped; schema changes get a new version. Every
//! migration is idempotent, so re-running after a crash is safe.

use crate::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Current schema version
///
/// Increment when adding a new migration.
const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Get current schema version from database
///
/// Returns 0 if the schema_version table doesn't exist or has no rows
async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name='schema_version'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version = get_schema_version(pool).await?;

    if current_version == CURRENT_SCHEMA_VERSION {
        info!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    if current_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current_version, CURRENT_SCHEMA_VERSION
        );
        warn!("This may indicate a downgrade. Proceeding with caution.");
        return Ok(());
    }

    info!(
        "Running database migrations: v{} -> v{}",
        current_version, CURRENT_SCHEMA_VERSION
    );

    // v1 is the baseline schema, created by init_schema before this runs
    if current_version < 1 {
        set_schema_version(pool, 1).await?;
        info!("✓ Migration v1 (baseline) recorded");
    }

    if current_version < 2 {
        migrate_v2(pool).await?;
        set_schema_version(pool, 2).await?;
        info!("✓ Migration v2 completed");
    }

    info!("All migrations completed successfully");
    Ok(())
}

/// Migration v2: add manufacturer column to drink_record
///
/// **Background:** drink_record originally shipped without a manufacturer
/// column; it was added in a later release. Databases created before then
/// need the column added in place.
async fn migrate_v2(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v2: Add manufacturer column to drink_record");

    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name='drink_record'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        // Table doesn't exist yet - will be created with the full schema
        info!("  drink_record table doesn't exist yet - skipping migration");
        return Ok(());
    }

    let has_column: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('drink_record') WHERE name = 'manufacturer'",
    )
    .fetch_one(pool)
    .await?;

    if has_column > 0 {
        info!("  manufacturer column already exists - skipping");
        return Ok(());
    }

    // Catch duplicate column error for concurrent initialization race conditions
    match sqlx::query("ALTER TABLE drink_record ADD COLUMN manufacturer TEXT")
        .execute(pool)
        .await
    {
        Ok(_) => {
            info!("  ✓ Added manufacturer column to drink_record table");
            Ok(())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("duplicate column") => {
            info!("  manufacturer column added by concurrent thread - skipping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
