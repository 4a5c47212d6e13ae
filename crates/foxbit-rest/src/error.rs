//! Foxbit REST API error types.

use auth::{AuthError, SignError};
use common::ParseEndpointError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the Foxbit REST API.
#[derive(Debug, Error)]
pub enum FoxbitRestError {
    /// REST client error (non-success status, network, timeout).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Credentials missing or invalid.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Signature material could not be built.
    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    /// Base URL is not usable.
    #[error("Configuration error: {0}")]
    Endpoint(#[from] ParseEndpointError),

    /// Response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FoxbitRestError {
    /// HTTP status code when the exchange answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(rest_err) => rest_err.status(),
            _ => None,
        }
    }

    /// Check if the request never got an HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Rest(rest_err) if rest_err.is_transport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passthrough() {
        let err = FoxbitRestError::from(RestError::HttpStatus {
            status: 401,
            body: "unauthorized".into(),
        });
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_classification() {
        let transport = FoxbitRestError::from(RestError::Timeout);
        assert!(transport.is_transport());
        assert_eq!(transport.status(), None);

        let config = FoxbitRestError::from(AuthError::MissingEnvVar("FOXBIT_API_KEY".into()));
        assert!(!config.is_transport());
        assert_eq!(config.status(), None);
    }
}
