//! Error types for the Meyoil server application.
//!
//! Domain errors (authentication, configuration, Nexon account checks, input validation)
//! are grouped into their own enums and folded into [`Error`] with `#[from]` so handlers can
//! use `?` throughout. Every error converts into an HTTP response through `IntoResponse`.

pub mod auth;
pub mod boss;
pub mod config;
pub mod nexon;
pub mod retry;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, user::ValidationError},
    server::error::{
        auth::AuthError, boss::BossError, config::ConfigError, nexon::NexonError,
    },
};

/// Main error type for the Meyoil server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, credentials, character ownership)
/// - Nexon account errors (API key rejected, character not on the account)
/// - Validation errors (malformed request bodies)
/// - External library errors (database, Nexon API client, sessions, scheduler, hashing)
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    NexonError(#[from] NexonError),
    #[error(transparent)]
    BossError(#[from] BossError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Failed to parse a value from a string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// A bug in Meyoil's code; should never occur in normal operation.
    #[error("Internal error with Meyoil's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Nexon Open API request failed (transport, upstream status, bad body).
    #[error(transparent)]
    NexonApiError(#[from] nexon_api::Error),
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, rejected API keys, characters missing from the account
/// - 401 Unauthorized - Wrong login credentials or current password
/// - 404 Not Found - Missing users, characters or bosses
/// - 409 Conflict - Character already registered to another account
/// - 502 Bad Gateway - Nexon Open API unavailable after retries
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::NexonError(err) => err.into_response(),
            Self::BossError(err) => err.into_response(),
            Self::ValidationError(err) => validation::into_response(err),
            Self::NexonApiError(err) => nexon::api_error_response(err),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
