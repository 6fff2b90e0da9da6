//! Data model shared by the pipeline stages.

mod book;
mod request;
mod status;

pub use book::{generate_book_id, BookGenre, CatalogEntry, FormattedBook, BOOK_ID_PREFIX};
pub use request::{generate_publishing_record_id, PublishRequest, PUBLISHING_RECORD_ID_PREFIX};
pub use status::{PublishingStatus, StatusRecord};
