//! Record persistence seam
//!
//! One trait, two implementations: SQLite for the real store, in-memory
//! for tests and persistence-free use. Both honor the same contract:
//! insert-only registration, absence as `None`, idempotent delete.

use async_trait::async_trait;

use crate::model::{DrinkRecord, DrinkRecordId};
use crate::Result;

mod memory;
mod sqlite;

pub use memory::InMemoryDrinkRecordRepository;
pub use sqlite::SqliteDrinkRecordRepository;

/// Storage operations over drink records
#[async_trait]
pub trait DrinkRecordRepository: Send + Sync {
    /// All records, order unspecified
    async fn search(&self) -> Result<Vec<DrinkRecord>>;

    /// Record by id; `None` when absent
    async fn find(&self, id: &DrinkRecordId) -> Result<Option<DrinkRecord>>;

    /// Insert a new record
    ///
    /// Fails with [`crate::Error::AlreadyExists`] when the id is already
    /// registered; nothing is overwritten.
    async fn register(&self, record: &DrinkRecord) -> Result<()>;

    /// Delete a record by id
    ///
    /// Deleting an absent id is a no-op, not an error.
    async fn delete(&self, id: &DrinkRecordId) -> Result<()>;
}
