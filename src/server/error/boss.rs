use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum BossError {
    #[error("Boss {0:?} is not in the catalog")]
    BossNotFound(String),
}

impl IntoResponse for BossError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::BossNotFound(_) => error_response(StatusCode::NOT_FOUND, "Boss not found"),
        }
    }
}
