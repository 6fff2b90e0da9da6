//! Error type for the inbound service facade.

use crate::catalog::CatalogError;
use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Book or resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Catalog or status store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::BookNotFound { book_id } => ServiceError::NotFound(book_id),
            CatalogError::Store(err) => ServiceError::Store(err),
        }
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Store(_) => 500,
        }
    }
}
