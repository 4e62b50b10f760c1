//! In-memory repository
//!
//! Same observable contract as the SQLite implementation, backed by a map.
//! Useful in tests and anywhere the library runs without a database file.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::model::{DrinkRecord, DrinkRecordId};
use crate::repository::DrinkRecordRepository;

#[derive(Debug, Default)]
pub struct InMemoryDrinkRecordRepository {
    records: RwLock<HashMap<DrinkRecordId, DrinkRecord>>,
}

impl InMemoryDrinkRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DrinkRecordRepository for InMemoryDrinkRecordRepository {
    async fn search(&self) -> Result<Vec<DrinkRecord>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn find(&self, id: &DrinkRecordId) -> Result<Option<DrinkRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn register(&self, record: &DrinkRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(record.id()) {
            return Err(Error::AlreadyExists(format!(
                "drink record {}",
                record.id()
            )));
        }
        records.insert(record.id().clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &DrinkRecordId) -> Result<()> {
        let mut records = self.records.write().await;
        // Absent id is a no-op, matching the SQLite implementation
        records.remove(id);
        Ok(())
    }
}
