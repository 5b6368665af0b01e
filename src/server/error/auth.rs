use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed for main character {0:?}")]
    InvalidCredentials(String),
    #[error("No account is registered with main character {0:?}")]
    MainCharacterNotRegistered(String),
    #[error("Character {0:?} is already registered to an account")]
    CharacterAlreadyRegistered(String),
    #[error("Character {0:?} is not linked to user ID {1}")]
    CharacterNotOwned(String, i32),
    #[error("Current password did not match for user ID {0}")]
    CurrentPasswordIncorrect(i32),
}

impl AuthError {
    fn user_not_found() -> Response {
        error_response(StatusCode::NOT_FOUND, "User not found")
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => Self::user_not_found(),
            // Unknown character and wrong password share a message so accounts can't be probed
            Self::InvalidCredentials(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid main character name or password",
            ),
            Self::MainCharacterNotRegistered(name) => error_response(
                StatusCode::NOT_FOUND,
                format!("No account is registered with main character {}", name),
            ),
            Self::CharacterAlreadyRegistered(name) => error_response(
                StatusCode::CONFLICT,
                format!("Character {} is already registered to an account", name),
            ),
            Self::CharacterNotOwned(name, _) => error_response(
                StatusCode::NOT_FOUND,
                format!("Character {} is not linked to your account", name),
            ),
            Self::CurrentPasswordIncorrect(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Current password is incorrect")
            }
        }
    }
}
