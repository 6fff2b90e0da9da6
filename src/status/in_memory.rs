//! InMemoryStatusStore - HashMap-backed status history.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::StatusStore;
use crate::error::StoreError;
use crate::model::StatusRecord;

/// In-memory append-only status store. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryStatusStore {
    records: Arc<RwLock<HashMap<String, Vec<StatusRecord>>>>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all publishing record ids.
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("status read"))?;
        Ok(records.values().map(Vec::len).sum())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl StatusStore for InMemoryStatusStore {
    fn append(&self, record: StatusRecord) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("status write"))?;
        records
            .entry(record.publishing_record_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn query_by_record_id(
        &self,
        publishing_record_id: &str,
    ) -> Result<Vec<StatusRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("status read"))?;
        Ok(records
            .get(publishing_record_id)
            .cloned()
            .unwrap_or_default())
    }
}
