//! Status-change notifications for in-process subscribers.
//!
//! Requires the `emitter` feature.

use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use super::StatusStore;
use crate::error::StoreError;
use crate::model::StatusRecord;

/// Event name every appended record is emitted on.
pub const STATUS_EVENT: &str = "publishing.status";

/// Wraps a [`StatusStore`] and emits each appended record as JSON.
///
/// Records go out on [`STATUS_EVENT`] and on `publishing.status.<STATUS>`
/// (e.g. `publishing.status.FAILED`). Emission happens only after the
/// inner append succeeded. Listeners run on the emitter's own threads.
pub struct EmittingStatusStore<S> {
    inner: S,
    emitter: Mutex<EventEmitter>,
}

impl<S: StatusStore> EmittingStatusStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Register a listener. It receives the record serialized as JSON.
    pub fn on<F>(&self, event: &str, listener: F) -> Result<(), StoreError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("emitter register"))?
            .on(event, listener);
        Ok(())
    }

    /// Runs after the inner append; failures are logged, not returned.
    fn emit(&self, record: &StatusRecord) {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("could not encode status record for emit: {}", err);
                return;
            }
        };
        let status_event = format!("{}.{}", STATUS_EVENT, record.status);

        let Ok(mut emitter) = self.emitter.lock() else {
            log::warn!(
                "emitter lock poisoned, dropping {} notification for {}",
                record.status,
                record.publishing_record_id
            );
            return;
        };
        emitter.emit(STATUS_EVENT, payload.clone());
        emitter.emit(&status_event, payload);
    }
}

impl<S: StatusStore> StatusStore for EmittingStatusStore<S> {
    fn append(&self, record: StatusRecord) -> Result<(), StoreError> {
        self.inner.append(record.clone())?;
        self.emit(&record);
        Ok(())
    }

    fn query_by_record_id(
        &self,
        publishing_record_id: &str,
    ) -> Result<Vec<StatusRecord>, StoreError> {
        self.inner.query_by_record_id(publishing_record_id)
    }
}
