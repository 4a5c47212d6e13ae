//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - Any HTTP method through a single `send` call
//! - Raw body passthrough, so signed query strings and bodies are sent unchanged
//! - Header injection for authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::{Method, RestClient};
//! use std::time::Duration;
//!
//! let client = RestClient::new("https://api.foxbit.com.br", Duration::from_secs(30))?;
//! let body = client.send(Method::GET, "/rest/v3/me", None, &headers, None).await?;
//! ```

mod client;
mod error;

pub use client::{is_success_status, RestClient};
pub use error::RestError;
pub use reqwest::Method;
