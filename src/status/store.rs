//! StatusStore - append-only storage seam for status records.

use crate::error::StoreError;
use crate::model::StatusRecord;

pub trait StatusStore: Send + Sync {
    /// Append a record. Existing records are never overwritten.
    fn append(&self, record: StatusRecord) -> Result<(), StoreError>;

    /// All records for a publishing record id, in insertion order.
    fn query_by_record_id(&self, publishing_record_id: &str)
        -> Result<Vec<StatusRecord>, StoreError>;
}
