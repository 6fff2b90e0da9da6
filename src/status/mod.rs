//! Publishing status history.
//!
//! Each state transition of a publishing record is appended as a new
//! [`StatusRecord`](crate::StatusRecord). A record id whose history has no
//! SUCCESSFUL or FAILED entry is still processing.

#[cfg(feature = "emitter")]
mod emitting;
mod in_memory;
mod query;
mod store;

#[cfg(feature = "emitter")]
pub use emitting::{EmittingStatusStore, STATUS_EVENT};
pub use in_memory::InMemoryStatusStore;
pub use query::{PublishingStatusEntry, StatusQueryService};
pub use store::StatusStore;
