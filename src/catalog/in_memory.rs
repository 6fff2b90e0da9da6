//! InMemoryCatalogStore - HashMap-backed catalog for tests and single-process use.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::CatalogStore;
use crate::error::StoreError;
use crate::model::CatalogEntry;

type Versions = BTreeMap<u64, CatalogEntry>;

/// In-memory catalog store. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    books: Arc<RwLock<HashMap<String, Versions>>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entries across all books.
    pub fn len(&self) -> Result<usize, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog read"))?;
        Ok(books.values().map(BTreeMap::len).sum())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn latest_version(&self, book_id: &str) -> Result<Option<CatalogEntry>, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog read"))?;
        Ok(books
            .get(book_id)
            .and_then(|versions| versions.values().next_back())
            .cloned())
    }

    fn save(&self, entry: &CatalogEntry) -> Result<(), StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("catalog write"))?;
        books
            .entry(entry.book_id.clone())
            .or_default()
            .insert(entry.version, entry.clone());
        Ok(())
    }

    fn versions(&self, book_id: &str) -> Result<Vec<CatalogEntry>, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("catalog read"))?;
        Ok(books
            .get(book_id)
            .map(|versions| versions.values().cloned().collect())
            .unwrap_or_default())
    }
}
