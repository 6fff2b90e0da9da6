//! Versioned book catalog.
//!
//! Every successful publish adds a row; rows are never deleted. For each
//! book, versions run densely from 1 and at most one version is active
//! (`inactive == false`).
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use kindle_publishing::{BookGenre, Catalog, FormattedBook, InMemoryCatalogStore};
//!
//! let catalog = Catalog::new(Arc::new(InMemoryCatalogStore::new()));
//! let book = FormattedBook {
//!     book_id: None,
//!     title: "Dune".into(),
//!     author: "Frank Herbert".into(),
//!     rendered_text: "...".into(),
//!     genre: BookGenre::ScienceFiction,
//! };
//!
//! let v1 = catalog.create_or_update_book(&book).unwrap();
//! let v2 = catalog
//!     .create_or_update_book(&FormattedBook { book_id: Some(v1.book_id.clone()), ..book })
//!     .unwrap();
//! assert_eq!(v2.version, 2);
//! ```

#[allow(clippy::module_inception)]
mod catalog;
mod in_memory;
mod store;

use crate::error::StoreError;

pub use catalog::Catalog;
pub use in_memory::InMemoryCatalogStore;
pub use store::CatalogStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no book found for id: {book_id}")]
    BookNotFound { book_id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub(crate) fn not_found(book_id: &str) -> Self {
        CatalogError::BookNotFound {
            book_id: book_id.to_string(),
        }
    }
}
