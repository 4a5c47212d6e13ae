use hmac::digest::InvalidLength;
use thiserror::Error;

/// Errors that can occur while loading credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A credential is present but blank.
    #[error("Credential {0} is empty")]
    EmptyCredential(&'static str),
}

/// Errors that can occur while building signature material.
#[derive(Debug, Error)]
pub enum SignError {
    /// The MAC rejected the secret as a key.
    #[error("Invalid HMAC key length")]
    Key(#[from] InvalidLength),

    /// Query parameters could not be URL-encoded.
    #[error("Failed to encode query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}
