//! Book conversion seam.

use crate::model::{FormattedBook, PublishRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("conversion rejected: {0}")]
    Rejected(String),
}

/// Turns a raw publish request into a formatted book.
pub trait BookConverter: Send + Sync {
    fn convert(&self, request: &PublishRequest) -> Result<FormattedBook, ConvertError>;
}

/// Default converter: a title header followed by the normalized content.
///
/// Trailing whitespace is stripped from each line and runs of blank lines
/// collapse into a single paragraph break. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct KindleFormatConverter;

impl BookConverter for KindleFormatConverter {
    fn convert(&self, request: &PublishRequest) -> Result<FormattedBook, ConvertError> {
        Ok(FormattedBook {
            book_id: request.book_id().map(str::to_string),
            title: request.title().to_string(),
            author: request.author().to_string(),
            rendered_text: render(request.title(), request.author(), request.raw_content()),
            genre: request.genre(),
        })
    }
}

fn render(title: &str, author: &str, raw_content: &str) -> String {
    let mut text = format!("{title}\nby {author}\n");
    let mut pending_break = true;

    for line in raw_content.lines().map(str::trim_end) {
        if line.is_empty() {
            pending_break = true;
            continue;
        }
        if pending_break {
            text.push('\n');
            pending_break = false;
        }
        text.push_str(line);
        text.push('\n');
    }
    text
}
