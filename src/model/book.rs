use serde::{Deserialize, Serialize};

/// Prefix for generated book ids.
pub const BOOK_ID_PREFIX: &str = "book.";

/// Generate a fresh book id (`book.<uuid>`).
pub fn generate_book_id() -> String {
    format!("{}{}", BOOK_ID_PREFIX, uuid::Uuid::new_v4())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookGenre {
    Fantasy,
    Mystery,
    Romance,
    ScienceFiction,
    Horror,
    Thriller,
    Biography,
    History,
    Childrens,
    #[default]
    Unclassified,
}

/// Conversion output, consumed immediately by the catalog commit.
///
/// `book_id` is `None` when the book has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBook {
    pub book_id: Option<String>,
    pub title: String,
    pub author: String,
    pub rendered_text: String,
    pub genre: BookGenre,
}

/// One version of a book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub book_id: String,
    pub version: u64,
    pub title: String,
    pub author: String,
    pub rendered_text: String,
    pub genre: BookGenre,
    pub inactive: bool,
}

impl CatalogEntry {
    /// The first, active version of a newly created book.
    pub fn first_version(book_id: impl Into<String>, book: &FormattedBook) -> Self {
        Self {
            book_id: book_id.into(),
            version: 1,
            title: book.title.clone(),
            author: book.author.clone(),
            rendered_text: book.rendered_text.clone(),
            genre: book.genre,
            inactive: false,
        }
    }

    /// The active version that supersedes `self`, carrying the new content.
    pub fn next_version(&self, book: &FormattedBook) -> Self {
        Self {
            book_id: self.book_id.clone(),
            version: self.version + 1,
            title: book.title.clone(),
            author: book.author.clone(),
            rendered_text: book.rendered_text.clone(),
            genre: book.genre,
            inactive: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.inactive
    }
}
