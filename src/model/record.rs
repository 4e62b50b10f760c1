//! The drink record entity
//!
//! Records are immutable: construction goes through [`DrinkRecord::new`]
//! (which assigns identity and creation time) or
//! [`DrinkRecord::reconstruct`] (persistence layer only), and there are no
//! setters. Replacing a record means delete-and-recreate.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

use crate::model::{DrinkType, Prefecture};

/// Opaque record identifier
///
/// ULID string: unique, and lexicographically ordered by creation time.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DrinkRecordId(String);

impl DrinkRecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        DrinkRecordId(Ulid::new().to_string())
    }

    /// Wrap a previously stored identifier
    pub fn reconstruct(value: impl Into<String>) -> Self {
        DrinkRecordId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DrinkRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrinkRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logged tasting event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkRecord {
    id: DrinkRecordId,
    name: String,
    manufacturer: Option<String>,
    drink_type: DrinkType,
    prefecture: Prefecture,
    rating: u8,
    photo_path: Option<String>,
    drink_date: NaiveDate,
    description: Option<String>,
    created_at: NaiveDateTime,
}

impl DrinkRecord {
    /// Create a new record, assigning `id` and `created_at`
    ///
    /// Field rules (non-blank name, rating range, non-future date) are the
    /// job of [`crate::validation::RecordForm`]; call this with already
    /// validated values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        manufacturer: Option<String>,
        drink_type: DrinkType,
        prefecture: Prefecture,
        rating: u8,
        photo_path: Option<String>,
        drink_date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        DrinkRecord {
            id: DrinkRecordId::new(),
            name,
            manufacturer,
            drink_type,
            prefecture,
            rating,
            photo_path,
            drink_date,
            description,
            created_at: Local::now().naive_local(),
        }
    }

    /// Rebuild a record from stored fields without generating fresh identity
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: DrinkRecordId,
        name: String,
        manufacturer: Option<String>,
        drink_type: DrinkType,
        prefecture: Prefecture,
        rating: u8,
        photo_path: Option<String>,
        drink_date: NaiveDate,
        description: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        DrinkRecord {
            id,
            name,
            manufacturer,
            drink_type,
            prefecture,
            rating,
            photo_path,
            drink_date,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> &DrinkRecordId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    pub fn drink_type(&self) -> DrinkType {
        self.drink_type
    }

    pub fn prefecture(&self) -> Prefecture {
        self.prefecture
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn photo_path(&self) -> Option<&str> {
        self.photo_path.as_deref()
    }

    pub fn drink_date(&self) -> NaiveDate {
        self.drink_date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
