//! SQLite-backed repository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::db::DrinkRecordRow;
use crate::error::{Error, Result};
use crate::model::{DrinkRecord, DrinkRecordId};
use crate::repository::DrinkRecordRepository;

const SELECT_COLUMNS: &str =
    "id, name, manufacturer, type, prefecture, rating, photoPath, drinkDate, description, createdAt";

/// Repository over the drink_record table
///
/// Expects a pool whose schema has been set up by
/// [`crate::db::init_database`] (or [`crate::db::init_schema`] in tests).
#[derive(Debug, Clone)]
pub struct SqliteDrinkRecordRepository {
    pool: SqlitePool,
}

impl SqliteDrinkRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DrinkRecordRepository for SqliteDrinkRecordRepository {
    async fn search(&self) -> Result<Vec<DrinkRecord>> {
        let rows = sqlx::query_as::<_, DrinkRecordRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM drink_record"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("search returned {} records", rows.len());
        rows.into_iter().map(DrinkRecordRow::into_model).collect()
    }

    async fn find(&self, id: &DrinkRecordId) -> Result<Option<DrinkRecord>> {
        let row = sqlx::query_as::<_, DrinkRecordRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM drink_record WHERE id = ?"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DrinkRecordRow::into_model).transpose()
    }

    async fn register(&self, record: &DrinkRecord) -> Result<()> {
        let row = DrinkRecordRow::from_model(record);

        let result = sqlx::query(
            r#"
            INSERT INTO drink_record
                (id, name, manufacturer, type, prefecture, rating, photoPath, drinkDate, description, createdAt)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.name)
        .bind(&row.manufacturer)
        .bind(&row.drink_type)
        .bind(&row.prefecture)
        .bind(row.rating)
        .bind(&row.photo_path)
        .bind(&row.drink_date)
        .bind(&row.description)
        .bind(&row.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("registered drink record {}", row.id);
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::AlreadyExists(format!("drink record {}", row.id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &DrinkRecordId) -> Result<()> {
        let result = sqlx::query("DELETE FROM drink_record WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            // Absent id: treated as success, same as the engine does
            warn!("delete of unknown drink record {}", id);
        } else {
            debug!("deleted drink record {}", id);
        }

        Ok(())
    }
}
