//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Method, Response};
use std::time::Duration;

/// Returns true for the statuses treated as success (200 OK, 201 Created).
pub fn is_success_status(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Generic REST client for making HTTP requests.
///
/// Query strings and bodies are passed through verbatim, so callers that
/// sign requests control the exact bytes on the wire.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.foxbit.com.br")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send one request and return the raw response body.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Request path (e.g., "/rest/v3/me")
    /// * `query` - Optional pre-encoded query string (without leading '?')
    /// * `headers` - Additional headers
    /// * `body` - Optional body, sent byte-for-byte
    ///
    /// # Errors
    /// `RestError::HttpStatus` for any status other than 200/201, transport
    /// variants for network failures.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<Vec<u8>, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method, &url);

        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Read the full body and map the status to success or `HttpStatus`.
    async fn handle_response(&self, response: Response) -> Result<Vec<u8>, RestError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        if is_success_status(status) {
            Ok(body.to_vec())
        } else {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(status = status, body = %body, "Request failed");

            Err(RestError::HttpStatus { status, body })
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
