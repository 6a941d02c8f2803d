//! Error types for the upstream clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to an upstream service
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream returned an error status code
    #[error("Upstream error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Response parsed, but the expected top-level container was missing
    #[error("Response has no `{0}` container")]
    MissingContainer(&'static str),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the upstream answered, but without the data we asked for
    pub fn is_missing_container(&self) -> bool {
        matches!(self, Self::MissingContainer(_))
    }

    /// Check if the upstream could not be reached or answered with 5xx
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
            || matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}
