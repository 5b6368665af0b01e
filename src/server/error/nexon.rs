use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

/// Account-level problems detected while talking to the Nexon Open API.
#[derive(Error, Debug)]
pub enum NexonError {
    #[error("Character {0:?} was not found on the account for the provided API key")]
    CharacterNotOnAccount(String),
    #[error("Character {name:?} is level {level}, below the boss level floor of {floor}")]
    CharacterBelowLevelFloor { name: String, level: i32, floor: i32 },
}

impl IntoResponse for NexonError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::CharacterNotOnAccount(name) => error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "Character {} was not found on the account for this API key",
                    name
                ),
            ),
            Self::CharacterBelowLevelFloor { name, floor, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Character {} must be at least level {}", name, floor),
            ),
        }
    }
}

/// Maps a failed Nexon Open API request to a client-facing response.
///
/// A rejected key is the caller's fault, an unavailable upstream is reported as a bad
/// gateway, and anything else is treated as our own bug.
pub fn api_error_response(err: nexon_api::Error) -> Response {
    if err.is_invalid_api_key() {
        tracing::debug!("{}", err);

        return error_response(StatusCode::BAD_REQUEST, "Invalid Nexon API key");
    }

    if err.is_transient() {
        tracing::warn!("{}", err);

        return error_response(
            StatusCode::BAD_GATEWAY,
            "Nexon Open API is unavailable, please try again later",
        );
    }

    InternalServerError(err).into_response()
}
