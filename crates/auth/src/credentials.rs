//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of the API secret
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the public API key.
pub const API_KEY_VAR: &str = "FOXBIT_API_KEY";

/// Environment variable holding the HMAC secret.
pub const API_SECRET_VAR: &str = "FOXBIT_API_SECRET";

/// API credentials for authenticated requests.
///
/// The secret is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `FOXBIT_API_KEY` - The API key (public, sent as `X-FB-ACCESS-KEY`)
    /// - `FOXBIT_API_SECRET` - The HMAC secret (private)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVar` if either variable is not set and
    /// `AuthError::EmptyCredential` if either is blank.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        let api_key = read_var(API_KEY_VAR)?;
        let api_secret = read_var(API_SECRET_VAR)?;

        Self::validated(api_key, api_secret)
    }

    /// Create credentials from explicit values after rejecting blank ones.
    pub fn validated(api_key: String, api_secret: String) -> Result<Self, AuthError> {
        if api_key.trim().is_empty() {
            return Err(AuthError::EmptyCredential(API_KEY_VAR));
        }
        if api_secret.trim().is_empty() {
            return Err(AuthError::EmptyCredential(API_SECRET_VAR));
        }

        Ok(Self::new(api_key, api_secret))
    }

    /// Create credentials from explicit values.
    ///
    /// Useful for testing or when credentials come from other sources.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        }
    }

    /// Get the API key (public, safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Expose the secret for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

fn read_var(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingEnvVar(name.into()))
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
