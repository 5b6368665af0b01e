//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, checking status codes, response
//! bodies and the session and database state they leave behind.

mod auth;
mod boss;
mod user;

use axum::{body::to_bytes, response::Response};
use meyoil_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a JSON response body into `T`.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
