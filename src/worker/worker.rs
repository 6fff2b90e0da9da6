use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConvertFailurePolicy, WorkerConfig};
use crate::convert::{BookConverter, ConvertError, KindleFormatConverter};
use crate::error::StoreError;
use crate::model::{CatalogEntry, PublishRequest, PublishingStatus, StatusRecord};
use crate::queue::RequestQueue;
use crate::status::StatusStore;

/// Outcome of a single `process_one` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOneResult {
    /// The queue was empty; nothing was written.
    Idle,
    /// The request was committed and recorded SUCCESSFUL.
    Succeeded {
        publishing_record_id: String,
        entry: CatalogEntry,
    },
    /// The request was recorded FAILED.
    Failed {
        publishing_record_id: String,
        book_id: Option<String>,
        reason: String,
    },
}

impl ProcessOneResult {
    /// Whether a request was taken off the queue.
    pub fn did_work(&self) -> bool {
        !matches!(self, ProcessOneResult::Idle)
    }
}

/// A `process_one` invocation that ended without a terminal status record.
/// The request has been dropped and is not re-enqueued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkerError {
    #[error("store failure while processing {publishing_record_id}: {source}")]
    Store {
        publishing_record_id: String,
        #[source]
        source: StoreError,
    },
    #[error("conversion failed for {publishing_record_id}: {source}")]
    Convert {
        publishing_record_id: String,
        #[source]
        source: ConvertError,
    },
}

/// Drives one publish request at a time through its status and catalog
/// transitions.
///
/// `process_one` is not safe to run concurrently with itself for requests
/// touching the same book. Hand the worker to a
/// [`PublishScheduler`](crate::PublishScheduler), which owns it on a single
/// thread.
pub struct PublishWorker {
    queue: RequestQueue,
    catalog: Catalog,
    status: Arc<dyn StatusStore>,
    converter: Arc<dyn BookConverter>,
    convert_failure: ConvertFailurePolicy,
}

impl PublishWorker {
    /// Create a worker with the default [`KindleFormatConverter`].
    pub fn new(queue: RequestQueue, catalog: Catalog, status: Arc<dyn StatusStore>) -> Self {
        Self {
            queue,
            catalog,
            status,
            converter: Arc::new(KindleFormatConverter),
            convert_failure: ConvertFailurePolicy::default(),
        }
    }

    pub fn with_converter(mut self, converter: Arc<dyn BookConverter>) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_convert_failure(mut self, policy: ConvertFailurePolicy) -> Self {
        self.convert_failure = policy;
        self
    }

    pub fn with_config(self, config: &WorkerConfig) -> Self {
        self.with_convert_failure(config.convert_failure)
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// Take the next request off the queue and publish it.
    ///
    /// IN_PROGRESS is recorded before any conversion or catalog work, so
    /// every dequeued request is visible in its status history.
    pub fn process_one(&self) -> Result<ProcessOneResult, WorkerError> {
        let Some(request) = self.queue.dequeue() else {
            return Ok(ProcessOneResult::Idle);
        };
        let record_id = request.publishing_record_id();
        log::info!("processing publish request {}", record_id);

        self.record(record_id, PublishingStatus::InProgress, request.book_id(), None)?;

        let formatted = match self.converter.convert(&request) {
            Ok(formatted) => formatted,
            Err(err) => {
                return match self.convert_failure {
                    ConvertFailurePolicy::RecordFailed => self.fail(&request, err.to_string()),
                    ConvertFailurePolicy::Propagate => Err(WorkerError::Convert {
                        publishing_record_id: record_id.to_string(),
                        source: err,
                    }),
                };
            }
        };

        match self.catalog.create_or_update_book(&formatted) {
            Ok(entry) => {
                self.record(
                    record_id,
                    PublishingStatus::Successful,
                    Some(&entry.book_id),
                    None,
                )?;
                log::info!(
                    "published {} as {} version {}",
                    record_id,
                    entry.book_id,
                    entry.version
                );
                Ok(ProcessOneResult::Succeeded {
                    publishing_record_id: record_id.to_string(),
                    entry,
                })
            }
            Err(err @ CatalogError::BookNotFound { .. }) => self.fail(&request, err.to_string()),
            Err(CatalogError::Store(source)) => Err(WorkerError::Store {
                publishing_record_id: record_id.to_string(),
                source,
            }),
        }
    }

    fn fail(
        &self,
        request: &PublishRequest,
        reason: String,
    ) -> Result<ProcessOneResult, WorkerError> {
        let record_id = request.publishing_record_id();
        self.record(
            record_id,
            PublishingStatus::Failed,
            request.book_id(),
            Some(&reason),
        )?;
        log::warn!("publish request {} failed: {}", record_id, reason);
        Ok(ProcessOneResult::Failed {
            publishing_record_id: record_id.to_string(),
            book_id: request.book_id().map(str::to_string),
            reason,
        })
    }

    fn record(
        &self,
        publishing_record_id: &str,
        status: PublishingStatus,
        book_id: Option<&str>,
        reason: Option<&str>,
    ) -> Result<(), WorkerError> {
        self.status
            .append(StatusRecord::new(
                publishing_record_id,
                status,
                book_id,
                reason,
            ))
            .map_err(|source| WorkerError::Store {
                publishing_record_id: publishing_record_id.to_string(),
                source,
            })
    }
}
