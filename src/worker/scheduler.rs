//! Background thread that drains the request queue on a fixed cadence.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{ProcessOneResult, PublishWorker};
use crate::config::SchedulerConfig;

/// Statistics from the scheduler thread.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Number of `process_one` calls.
    pub ticks: usize,
    /// Requests taken off the queue.
    pub processed: usize,
    /// Requests recorded SUCCESSFUL.
    pub succeeded: usize,
    /// Requests recorded FAILED.
    pub failed: usize,
    /// Invocations that ended in a worker error (request dropped).
    pub errors: usize,
}

/// Drives a [`PublishWorker`] from one background thread.
///
/// The scheduler has exactly one worker slot: the worker is moved onto a
/// single thread and `process_one` calls never overlap. Catalog version
/// numbering for a book depends on this; do not run a second scheduler
/// against the same queue and catalog.
///
/// Stopping lets an in-flight request finish before the thread exits.
///
/// ## Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use kindle_publishing::{
///     Catalog, InMemoryCatalogStore, InMemoryStatusStore, PublishRequest, PublishScheduler,
///     PublishWorker, RequestQueue, SchedulerConfig,
/// };
///
/// let queue = RequestQueue::new();
/// let worker = PublishWorker::new(
///     queue.clone(),
///     Catalog::new(Arc::new(InMemoryCatalogStore::new())),
///     Arc::new(InMemoryStatusStore::new()),
/// );
///
/// let scheduler = PublishScheduler::spawn(
///     worker,
///     SchedulerConfig::default().with_poll_interval(Duration::from_millis(50)),
/// );
///
/// queue.enqueue(PublishRequest::new("Dune", "Frank Herbert", "..."));
///
/// // ... later ...
/// let stats = scheduler.stop();
/// println!("published {} books", stats.succeeded);
/// ```
pub struct PublishScheduler {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<SchedulerStats>>,
}

impl PublishScheduler {
    /// Spawn the scheduler thread. The first tick runs immediately.
    pub fn spawn(worker: PublishWorker, config: SchedulerConfig) -> Self {
        let (stop_tx, stop_rx) = channel();
        let interval = config.poll_interval();
        let drain_when_busy = config.drain_when_busy;

        let handle = thread::spawn(move || {
            let mut stats = SchedulerStats::default();
            log::debug!("publish scheduler started (interval {:?})", interval);

            loop {
                stats.ticks += 1;
                let found_work = tick(&worker, &mut stats);

                let wait = if drain_when_busy && found_work {
                    Duration::ZERO
                } else {
                    interval
                };

                // Sleeping on the stop channel keeps stop latency independent
                // of the poll interval.
                match stop_rx.recv_timeout(wait) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }
            }

            log::debug!("publish scheduler stopped after {} ticks", stats.ticks);
            stats
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the scheduler to stop and wait for the in-flight request.
    /// Returns the scheduler statistics.
    pub fn stop(mut self) -> SchedulerStats {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or_default()
        } else {
            SchedulerStats::default()
        }
    }

    /// Signal the scheduler to stop without waiting. Dropping the scheduler
    /// still joins the thread.
    pub fn signal_stop(&self) {
        let _ = self.stop_tx.send(());
    }
}

impl Drop for PublishScheduler {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        // Block until the in-flight request reaches a terminal record.
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Run one `process_one` and fold the outcome into `stats`. Returns whether
/// a request was taken off the queue.
fn tick(worker: &PublishWorker, stats: &mut SchedulerStats) -> bool {
    match worker.process_one() {
        Ok(ProcessOneResult::Idle) => false,
        Ok(ProcessOneResult::Succeeded { .. }) => {
            stats.processed += 1;
            stats.succeeded += 1;
            true
        }
        Ok(ProcessOneResult::Failed { .. }) => {
            stats.processed += 1;
            stats.failed += 1;
            true
        }
        Err(err) => {
            log::error!("{}", err);
            stats.processed += 1;
            stats.errors += 1;
            true
        }
    }
}
