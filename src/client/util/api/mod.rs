//! Thin wrappers over the server's JSON API.
//!
//! Failures come back as a message fit to show the user: the server's `ErrorDto` text when
//! the response carries one, otherwise a description of what went wrong.

pub mod auth;
pub mod boss;
pub mod user;

use reqwasm::http::{Method, Request, RequestCredentials, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::model::api::ErrorDto;

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(path)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse(response).await
}

/// Like [`get`], but a 404 yields `Ok(None)`.
pub async fn get_optional<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let response = Request::get(path)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }

    parse(response).await.map(Some)
}

pub async fn send<B, T>(method: Method, path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let body =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::new(path)
        .method(method)
        .header("Content-Type", "application/json")
        .credentials(RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse(response).await
}

/// POST without a request body.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let response = Request::post(path)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }

    parse(response).await.map(Some)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    match response.status() {
        200..=299 => response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        status => {
            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(error_dto.error)
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!("Request failed with status {}: {}", status, error_text))
            }
        }
    }
}
