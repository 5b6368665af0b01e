use thiserror::Error;

/// Errors returned by [`crate::Client`].
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or undecodable response body.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("Nexon API responded with status {status} ({name}): {message}")]
    ApiError {
        status: u16,
        name: String,
        message: String,
    },
    #[error("Invalid Nexon API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Error name the API uses for an unknown or malformed API key.
pub const INVALID_API_KEY: &str = "OPENAPI00005";

/// Error name the API uses once the per-key rate limit is exceeded.
pub const RATE_LIMITED: &str = "OPENAPI00007";

impl Error {
    /// HTTP status of the failed request, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidBaseUrl(_) => None,
        }
    }

    /// Whether the request was rejected because of the API key.
    pub fn is_invalid_api_key(&self) -> bool {
        match self {
            Self::ApiError { status, name, .. } => {
                name == INVALID_API_KEY || *status == 401 || *status == 403
            }
            _ => false,
        }
    }

    /// Whether retrying the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ApiError { status, name, .. } => {
                *status >= 500 || *status == 429 || name == RATE_LIMITED
            }
            Self::ReqwestError(e) => match e.status() {
                Some(status) => status.is_server_error(),
                None => !e.is_decode(),
            },
            Self::InvalidBaseUrl(_) => false,
        }
    }
}
