use crate::{client::Client, error::Error, DEFAULT_BASE_URL};

/// Builder for [`Client`].
///
/// Obtain one through [`Client::builder`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base URL, used to point the client at a mock server in tests.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(Client)` - Client ready to issue requests
    /// - `Err(Error::InvalidBaseUrl)` - The base URL is not an `http(s)://` URL
    /// - `Err(Error::ReqwestError)` - The underlying HTTP client could not be constructed
    pub fn build(self) -> Result<Client, Error> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidBaseUrl(base_url));
        }

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(Client::from_parts(http.build()?, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect trailing slashes to be stripped from the base URL
    fn trims_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:1234/")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    /// Expect the public API URL when no base URL is configured
    fn defaults_to_public_api() {
        let client = ClientBuilder::new().build().unwrap();

        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    /// Expect Error when the base URL has no scheme
    fn rejects_base_url_without_scheme() {
        let result = ClientBuilder::new().base_url("localhost:1234").build();

        assert!(matches!(result, Err(Error::InvalidBaseUrl(_))));
    }
}
