//! Inbound surface: the facade request handlers call, and its optional
//! HTTP transport.

mod error;
#[cfg(feature = "http")]
pub mod http;
mod publishing_service;

pub use error::ServiceError;
pub use publishing_service::{PublishingService, SubmitBook};
