//! HTTP transport for the publishing service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /books`: submit a book for publishing; `202` with the publishing record id.
//! - `GET /books/:book_id`: active version of a book.
//! - `DELETE /books/:book_id`: mark a book inactive.
//! - `GET /publishing-status/:id`: status history, most recent first.
//! - `GET /health`: `{ "ok": true, "queued": n }`.
//!
//! ## Example
//!
//! ```ignore
//! let app = service::http::router(Arc::new(publishing_service));
//! // or
//! service::http::serve(Arc::new(publishing_service), "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::{PublishingService, ServiceError, SubmitBook};

/// Build an axum `Router` over the given service.
pub fn router(service: Arc<PublishingService>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/books", post(submit_handler))
        .route("/books/:book_id", get(get_book_handler).delete(remove_book_handler))
        .route("/publishing-status/:id", get(status_handler))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve(service: Arc<PublishingService>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health_handler(State(service): State<Arc<PublishingService>>) -> impl IntoResponse {
    Json(json!({ "ok": true, "queued": service.queued() }))
}

async fn submit_handler(
    State(service): State<Arc<PublishingService>>,
    Json(submit): Json<SubmitBook>,
) -> impl IntoResponse {
    let id = service.submit_book_for_publishing(submit);
    (
        StatusCode::ACCEPTED,
        Json(json!({ "publishingRecordId": id })),
    )
}

async fn get_book_handler(
    State(service): State<Arc<PublishingService>>,
    Path(book_id): Path<String>,
) -> Response {
    match service.get_book(&book_id) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn remove_book_handler(
    State(service): State<Arc<PublishingService>>,
    Path(book_id): Path<String>,
) -> Response {
    match service.remove_book_from_catalog(&book_id) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn status_handler(
    State(service): State<Arc<PublishingService>>,
    Path(id): Path<String>,
) -> Response {
    match service.get_publishing_status(&id) {
        Ok(history) => (
            StatusCode::OK,
            Json(json!({ "publishingStatusHistory": history })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: ServiceError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
