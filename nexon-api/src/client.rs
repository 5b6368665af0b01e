use serde::de::DeserializeOwned;

use crate::{builder::ClientBuilder, error::Error, model::error::ApiErrorBody, API_KEY_HEADER};

/// HTTP client for the Nexon Open API.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues an authorized GET request and deserializes a successful JSON body.
    ///
    /// Non-2xx responses are converted into [`Error::ApiError`] using the API's
    /// `{ "error": { "name", "message" } }` body when one is present.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        api_key: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let (name, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => (parsed.error.name, parsed.error.message),
            Err(_) => ("UNKNOWN".to_string(), body),
        };

        Err(Error::ApiError {
            status: status.as_u16(),
            name,
            message,
        })
    }
}
