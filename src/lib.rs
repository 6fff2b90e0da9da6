//! Asynchronous book publishing pipeline.
//!
//! Submissions are queued on a [`RequestQueue`]; a [`PublishScheduler`]
//! drives a single [`PublishWorker`] that records IN_PROGRESS, converts the
//! book, commits a new version to the [`Catalog`] and records SUCCESSFUL or
//! FAILED. Status history is read back through [`StatusQueryService`].

pub mod catalog;
pub mod config;
pub mod convert;
mod error;
pub mod logging;
pub mod model;
pub mod queue;
pub mod service;
pub mod status;
pub mod worker;

pub use catalog::{Catalog, CatalogError, CatalogStore, InMemoryCatalogStore};
pub use config::{
    ConfigError, ConvertFailurePolicy, PipelineConfig, SchedulerConfig, WorkerConfig,
};
pub use convert::{BookConverter, ConvertError, KindleFormatConverter};
pub use error::StoreError;
pub use model::{
    BookGenre, CatalogEntry, FormattedBook, PublishRequest, PublishingStatus, StatusRecord,
};
pub use queue::RequestQueue;
pub use service::{PublishingService, ServiceError, SubmitBook};
#[cfg(feature = "emitter")]
pub use status::EmittingStatusStore;
pub use status::{InMemoryStatusStore, PublishingStatusEntry, StatusQueryService, StatusStore};
pub use worker::{ProcessOneResult, PublishScheduler, PublishWorker, SchedulerStats, WorkerError};
