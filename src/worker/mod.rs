//! Publish Worker - Drains the request queue into the catalog.
//!
//! - `PublishWorker` - processes one queued request per call
//! - `PublishScheduler` - background thread calling the worker on a cadence
//!
//! ## Lifecycle of a request
//!
//! ```text
//! dequeue ─▶ IN_PROGRESS ─▶ convert ─▶ catalog commit ─▶ SUCCESSFUL
//!                              │              │
//!                              └──────────────┴──────────▶ FAILED
//! ```
//!
//! Store failures end the invocation with a `WorkerError`; the request is
//! dropped, not retried.

mod scheduler;
#[allow(clippy::module_inception)]
mod worker;

pub use scheduler::{PublishScheduler, SchedulerStats};
pub use worker::{ProcessOneResult, PublishWorker, WorkerError};
