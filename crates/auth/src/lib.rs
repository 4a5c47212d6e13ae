//! Authentication and signing for the Foxbit REST API.
//!
//! This crate provides secure credential management and request signing
//! for authenticated API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: The API secret is wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Signs `timestamp + METHOD + path + query + body`
//!   and hex-encodes the digest.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{timestamp_ms, ApiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = ApiCredentials::from_env()?;
//!
//! // Create a signer
//! let signer = RequestSigner::new(&credentials);
//!
//! // Sign a request with query parameters
//! let params = [("market_symbol", "btcbrl"), ("state", "ACTIVE")];
//! let signed = signer.sign_request::<()>("GET", "/rest/v3/orders", Some(&params), None, timestamp_ms())?;
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_VAR, API_SECRET_VAR};
pub use error::{AuthError, SignError};
pub use signer::{encode_query, pre_hash, timestamp_ms, RequestSigner, SignedRequest};
