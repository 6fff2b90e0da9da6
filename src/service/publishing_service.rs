use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::catalog::Catalog;
use crate::model::{BookGenre, CatalogEntry, PublishRequest};
use crate::queue::RequestQueue;
use crate::status::{PublishingStatusEntry, StatusQueryService};

/// Inbound payload for a publish submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBook {
    #[serde(default)]
    pub book_id: Option<String>,
    pub title: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub genre: Option<BookGenre>,
}

impl From<SubmitBook> for PublishRequest {
    fn from(submit: SubmitBook) -> Self {
        PublishRequest::new(submit.title, submit.author, submit.text)
            .with_book_id(submit.book_id.unwrap_or_default())
            .with_genre(submit.genre.unwrap_or_default())
    }
}

/// Facade the inbound handlers call into.
///
/// Submissions only enqueue; the catalog is written later by the
/// [`PublishWorker`](crate::PublishWorker). Book removal goes straight to the
/// catalog.
#[derive(Clone)]
pub struct PublishingService {
    queue: RequestQueue,
    catalog: Catalog,
    status: StatusQueryService,
}

impl PublishingService {
    pub fn new(queue: RequestQueue, catalog: Catalog, status: StatusQueryService) -> Self {
        Self {
            queue,
            catalog,
            status,
        }
    }

    /// Enqueue a book for publishing and return its publishing record id.
    pub fn submit_book_for_publishing(&self, submit: SubmitBook) -> String {
        let request = PublishRequest::from(submit);
        let publishing_record_id = request.publishing_record_id().to_string();
        self.queue.enqueue(request);
        publishing_record_id
    }

    /// Status history of a submission, most recent first.
    pub fn get_publishing_status(
        &self,
        publishing_record_id: &str,
    ) -> Result<Vec<PublishingStatusEntry>, ServiceError> {
        Ok(self.status.get_history(publishing_record_id)?)
    }

    /// The active version of a book.
    pub fn get_book(&self, book_id: &str) -> Result<CatalogEntry, ServiceError> {
        Ok(self.catalog.get_book(book_id)?)
    }

    /// Mark a book inactive, bypassing the queue.
    pub fn remove_book_from_catalog(&self, book_id: &str) -> Result<CatalogEntry, ServiceError> {
        Ok(self.catalog.remove_book(book_id)?)
    }

    /// Number of submissions waiting for the worker.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
