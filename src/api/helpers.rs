//! Common helper functions for API handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Error body shared by every endpoint. Messages stay stable and
/// generic; upstream detail goes to the logs only.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns a JSON error response with the given status code and message.
#[must_use]
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
