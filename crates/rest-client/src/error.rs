//! REST client error types.

use thiserror::Error;

/// Errors that can occur during REST API calls.
#[derive(Debug, Error)]
pub enum RestError {
    /// Non-success status with the response body echoed for diagnostics.
    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (DNS, refused, reset).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to build the HTTP client or request.
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

impl RestError {
    /// Check if this error happened below HTTP (network or timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, RestError::Timeout | RestError::Connection(_))
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else {
            RestError::Connection(err.to_string())
        }
    }
}
