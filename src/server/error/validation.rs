use axum::{http::StatusCode, response::Response};
use dioxus_logger::tracing;

use crate::{model::user::ValidationError, server::error::error_response};

/// Rejected input is always the client's to fix, so the message is passed through as-is.
pub fn into_response(err: ValidationError) -> Response {
    tracing::debug!("Rejected request: {}", err);

    error_response(StatusCode::BAD_REQUEST, err.to_string())
}
