use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::StatusStore;
use crate::error::StoreError;
use crate::model::{PublishingStatus, StatusRecord};

/// One line of a publishing status history response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingStatusEntry {
    pub status: PublishingStatus,
    pub status_message: Option<String>,
    pub book_id: Option<String>,
}

impl From<StatusRecord> for PublishingStatusEntry {
    fn from(record: StatusRecord) -> Self {
        Self {
            status: record.status,
            status_message: record.status_message,
            book_id: record.book_id,
        }
    }
}

/// Read path over the status store.
#[derive(Clone)]
pub struct StatusQueryService {
    store: Arc<dyn StatusStore>,
}

impl StatusQueryService {
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Status history for a publishing record, most recent first.
    ///
    /// An unknown id yields an empty history.
    pub fn get_history(
        &self,
        publishing_record_id: &str,
    ) -> Result<Vec<PublishingStatusEntry>, StoreError> {
        let records = self.store.query_by_record_id(publishing_record_id)?;
        Ok(records
            .into_iter()
            .rev()
            .map(PublishingStatusEntry::from)
            .collect())
    }
}
