//! In-process FIFO of pending publish requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::PublishRequest;

/// Thread-safe FIFO shared by the submit path (producers) and the worker
/// (consumer).
///
/// Cloning creates another handle to the same queue, so the submit path and
/// the worker each hold one. `enqueue` never fails and never waits on
/// capacity.
///
/// ## Example
///
/// ```
/// use kindle_publishing::{PublishRequest, RequestQueue};
///
/// let queue = RequestQueue::new();
/// queue.enqueue(PublishRequest::new("Dune", "Frank Herbert", "..."));
///
/// let next = queue.dequeue().unwrap();
/// assert_eq!(next.title(), "Dune");
/// assert!(queue.dequeue().is_none());
/// ```
#[derive(Clone, Default)]
pub struct RequestQueue {
    pending: Arc<Mutex<VecDeque<PublishRequest>>>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request to the tail.
    pub fn enqueue(&self, request: PublishRequest) {
        log::debug!(
            "enqueued publish request {}",
            request.publishing_record_id()
        );
        self.pending().push_back(request);
    }

    /// Remove and return the head, or `None` when nothing is pending.
    pub fn dequeue(&self) -> Option<PublishRequest> {
        self.pending().pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending().is_empty()
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn pending(&self) -> MutexGuard<'_, VecDeque<PublishRequest>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
