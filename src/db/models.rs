//! Database row models
//!
//! One row struct per table, plus the fallible conversion back to the
//! domain model. Rows hold storage representations (codes and ISO-8601
//! text); anything stored that no longer parses surfaces as
//! [`Error::Internal`] rather than panicking.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Error, Result};
use crate::model::{DrinkRecord, DrinkRecordId, DrinkType, Prefecture};

/// ISO-8601 calendar date, e.g. `2024-03-01`
const DATE_FORMAT: &str = "%Y-%m-%d";
/// ISO-8601 date-time with optional fraction, e.g. `2024-03-01T19:30:00`
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A drink_record table row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DrinkRecordRow {
    pub id: String,
    pub name: String,
    pub manufacturer: Option<String>,
    #[sqlx(rename = "type")]
    pub drink_type: String,
    pub prefecture: String,
    pub rating: i64,
    #[sqlx(rename = "photoPath")]
    pub photo_path: Option<String>,
    #[sqlx(rename = "drinkDate")]
    pub drink_date: String,
    pub description: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: String,
}

impl DrinkRecordRow {
    /// Storage representation of a domain record
    pub fn from_model(record: &DrinkRecord) -> Self {
        DrinkRecordRow {
            id: record.id().to_string(),
            name: record.name().to_string(),
            manufacturer: record.manufacturer().map(String::from),
            drink_type: record.drink_type().code().to_string(),
            prefecture: record.prefecture().code().to_string(),
            rating: i64::from(record.rating()),
            photo_path: record.photo_path().map(String::from),
            drink_date: record.drink_date().format(DATE_FORMAT).to_string(),
            description: record.description().map(String::from),
            created_at: record.created_at().format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Rebuild the domain record from stored fields
    pub fn into_model(self) -> Result<DrinkRecord> {
        let drink_type = DrinkType::from_code(&self.drink_type).ok_or_else(|| {
            Error::Internal(format!(
                "drink_record {}: unknown drink type code '{}'",
                self.id, self.drink_type
            ))
        })?;

        let prefecture = Prefecture::from_code(&self.prefecture).ok_or_else(|| {
            Error::Internal(format!(
                "drink_record {}: unknown prefecture code '{}'",
                self.id, self.prefecture
            ))
        })?;

        let rating = u8::try_from(self.rating)
            .ok()
            .filter(|r| (1..=5).contains(r))
            .ok_or_else(|| {
                Error::Internal(format!(
                    "drink_record {}: rating {} out of range",
                    self.id, self.rating
                ))
            })?;

        let drink_date = NaiveDate::parse_from_str(&self.drink_date, DATE_FORMAT).map_err(|_| {
            Error::Internal(format!(
                "drink_record {}: bad drinkDate '{}'",
                self.id, self.drink_date
            ))
        })?;

        let created_at = NaiveDateTime::parse_from_str(&self.created_at, DATE_TIME_FORMAT)
            .map_err(|_| {
                Error::Internal(format!(
                    "drink_record {}: bad createdAt '{}'",
                    self.id, self.created_at
                ))
            })?;

        Ok(DrinkRecord::reconstruct(
            DrinkRecordId::reconstruct(self.id),
            self.name,
            self.manufacturer,
            drink_type,
            prefecture,
            rating,
            self.photo_path,
            drink_date,
            self.description,
            created_at,
        ))
    }
}
