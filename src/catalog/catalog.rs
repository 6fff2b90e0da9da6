use std::sync::Arc;

use super::{CatalogError, CatalogStore};
use crate::model::{generate_book_id, CatalogEntry, FormattedBook};

/// Catalog operations over a [`CatalogStore`].
///
/// Commits are not serialized here. Two concurrent commits for the same
/// book would both read the same latest version; callers rely on the
/// one-slot [`PublishScheduler`](crate::PublishScheduler) for ordering.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn CatalogStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Create a new book at version 1, or add a new active version to an
    /// existing book.
    ///
    /// When updating, the previous active version is deactivated before the
    /// new version is written, so an interrupted commit never leaves two
    /// active versions.
    pub fn create_or_update_book(&self, book: &FormattedBook) -> Result<CatalogEntry, CatalogError> {
        let book_id = book.book_id.as_deref().filter(|id| !id.is_empty());

        let entry = match book_id {
            None => CatalogEntry::first_version(generate_book_id(), book),
            Some(book_id) => {
                let mut latest = self.validate_book_exists(book_id)?;
                if latest.is_active() {
                    latest.inactive = true;
                    self.store.save(&latest)?;
                }
                latest.next_version(book)
            }
        };

        self.store.save(&entry)?;
        log::debug!(
            "committed {} version {} to catalog",
            entry.book_id,
            entry.version
        );
        Ok(entry)
    }

    /// The latest version of a book, which must be active.
    pub fn get_book(&self, book_id: &str) -> Result<CatalogEntry, CatalogError> {
        match self.store.latest_version(book_id)? {
            Some(entry) if entry.is_active() => Ok(entry),
            _ => Err(CatalogError::not_found(book_id)),
        }
    }

    /// Mark the active version of a book inactive.
    pub fn remove_book(&self, book_id: &str) -> Result<CatalogEntry, CatalogError> {
        let mut entry = self.get_book(book_id)?;
        entry.inactive = true;
        self.store.save(&entry)?;
        log::info!("removed {} (version {}) from catalog", book_id, entry.version);
        Ok(entry)
    }

    /// The latest version of a book, active or not.
    pub fn validate_book_exists(&self, book_id: &str) -> Result<CatalogEntry, CatalogError> {
        self.store
            .latest_version(book_id)?
            .ok_or_else(|| CatalogError::not_found(book_id))
    }
}
