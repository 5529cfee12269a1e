//! API client error types.

use thiserror::Error;

/// Errors returned by [`ApiClient`](super::ApiClient) requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape expected.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The bearer token could not be persisted or removed.
    #[error("token storage error: {0}")]
    TokenStore(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status for [`ApiError::Http`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
