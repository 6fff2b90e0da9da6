//! Shared wiring for pipeline tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use kindle_publishing::{
    Catalog, CatalogEntry, CatalogStore, InMemoryCatalogStore, InMemoryStatusStore,
    PublishRequest, PublishWorker, PublishingStatus, RequestQueue, StatusStore,
};

/// A queue, in-memory stores and a worker wired together.
pub struct Pipeline {
    pub queue: RequestQueue,
    pub catalog_store: InMemoryCatalogStore,
    pub status_store: InMemoryStatusStore,
    pub catalog: Catalog,
}

impl Pipeline {
    pub fn new() -> Self {
        let catalog_store = InMemoryCatalogStore::new();
        Self {
            queue: RequestQueue::new(),
            catalog: Catalog::new(Arc::new(catalog_store.clone())),
            catalog_store,
            status_store: InMemoryStatusStore::new(),
        }
    }

    pub fn worker(&self) -> PublishWorker {
        PublishWorker::new(
            self.queue.clone(),
            self.catalog.clone(),
            Arc::new(self.status_store.clone()),
        )
    }

    /// Enqueue a request and return its publishing record id.
    pub fn submit(&self, request: PublishRequest) -> String {
        let id = request.publishing_record_id().to_string();
        self.queue.enqueue(request);
        id
    }

    pub fn statuses(&self, publishing_record_id: &str) -> Vec<PublishingStatus> {
        self.status_store
            .query_by_record_id(publishing_record_id)
            .unwrap()
            .iter()
            .map(|r| r.status)
            .collect()
    }

    pub fn versions(&self, book_id: &str) -> Vec<CatalogEntry> {
        self.catalog_store.versions(book_id).unwrap()
    }

    /// Wait until the record has a terminal status or the timeout passes.
    pub fn wait_for_terminal(&self, publishing_record_id: &str) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if self
                .statuses(publishing_record_id)
                .iter()
                .any(|s| s.is_terminal())
            {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }
}

pub fn new_book(title: &str) -> PublishRequest {
    PublishRequest::new(title, "X", format!("{title} content"))
}

pub fn update(book_id: &str, title: &str) -> PublishRequest {
    PublishRequest::new(title, "X", format!("{title} content")).with_book_id(book_id)
}

/// Exactly one active version, and it is the highest.
pub fn assert_single_active(versions: &[CatalogEntry]) {
    let active: Vec<&CatalogEntry> = versions.iter().filter(|e| e.is_active()).collect();
    assert_eq!(active.len(), 1, "expected one active version: {versions:?}");
    let highest = versions.iter().map(|e| e.version).max().unwrap();
    assert_eq!(active[0].version, highest);
}

/// Versions run 1..=n with no gaps or duplicates.
pub fn assert_dense(versions: &[CatalogEntry]) {
    let numbers: Vec<u64> = versions.iter().map(|e| e.version).collect();
    let expected: Vec<u64> = (1..=versions.len() as u64).collect();
    assert_eq!(numbers, expected);
}
