use serde::{Deserialize, Serialize};

use super::BookGenre;

/// Prefix for generated publishing record ids.
pub const PUBLISHING_RECORD_ID_PREFIX: &str = "publishingrecord.";

/// Generate a fresh publishing record id (`publishingrecord.<uuid>`).
pub fn generate_publishing_record_id() -> String {
    format!("{}{}", PUBLISHING_RECORD_ID_PREFIX, uuid::Uuid::new_v4())
}

/// A request to publish a new book or a new version of an existing one.
///
/// Requests are immutable once built. The queue owns a request until the
/// worker dequeues it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    publishing_record_id: String,
    book_id: Option<String>,
    title: String,
    author: String,
    raw_content: String,
    genre: BookGenre,
}

impl PublishRequest {
    /// Create a request for a new book with a generated publishing record id.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        raw_content: impl Into<String>,
    ) -> Self {
        Self {
            publishing_record_id: generate_publishing_record_id(),
            book_id: None,
            title: title.into(),
            author: author.into(),
            raw_content: raw_content.into(),
            genre: BookGenre::default(),
        }
    }

    /// Target an existing book. An empty id is treated as "new book".
    pub fn with_book_id(mut self, book_id: impl Into<String>) -> Self {
        let book_id = book_id.into();
        self.book_id = if book_id.is_empty() {
            None
        } else {
            Some(book_id)
        };
        self
    }

    pub fn with_genre(mut self, genre: BookGenre) -> Self {
        self.genre = genre;
        self
    }

    /// Override the generated publishing record id.
    pub fn with_publishing_record_id(mut self, id: impl Into<String>) -> Self {
        self.publishing_record_id = id.into();
        self
    }

    pub fn publishing_record_id(&self) -> &str {
        &self.publishing_record_id
    }

    /// The book this request updates, or `None` for a new book.
    pub fn book_id(&self) -> Option<&str> {
        self.book_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn genre(&self) -> BookGenre {
        self.genre
    }

    /// Whether this request creates a new book rather than updating one.
    pub fn is_new_book(&self) -> bool {
        self.book_id().is_none()
    }
}
