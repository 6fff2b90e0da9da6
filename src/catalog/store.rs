//! CatalogStore - storage seam for book versions.

use crate::error::StoreError;
use crate::model::CatalogEntry;

/// Storage of catalog entries keyed by `(book_id, version)`.
///
/// Implementations only store and fetch; version numbering and the
/// single-active-version rule are enforced by [`Catalog`](super::Catalog).
pub trait CatalogStore: Send + Sync {
    /// The highest version stored for `book_id`, active or not.
    fn latest_version(&self, book_id: &str) -> Result<Option<CatalogEntry>, StoreError>;

    /// Upsert an entry by `(book_id, version)`.
    fn save(&self, entry: &CatalogEntry) -> Result<(), StoreError>;

    /// All versions of `book_id`, ascending by version.
    fn versions(&self, book_id: &str) -> Result<Vec<CatalogEntry>, StoreError>;
}
