//! HMAC-SHA256 request signing for the Foxbit REST API.

use crate::credentials::ApiCredentials;
use crate::error::SignError;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Current Unix time in milliseconds.
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Encode query parameters in canonical form.
///
/// Parameters are stably sorted by key and form URL-encoded, so callers may
/// pass them in any order. An empty slice encodes to an empty string.
pub fn encode_query(params: &[(&str, &str)]) -> Result<String, SignError> {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    Ok(serde_urlencoded::to_string(&sorted)?)
}

/// Build the string that gets signed.
///
/// `timestamp ‖ method ‖ path ‖ query ‖ body`, with no separators.
pub fn pre_hash(timestamp: &str, method: &str, path: &str, query: &str, body: &str) -> String {
    let mut out =
        String::with_capacity(timestamp.len() + method.len() + path.len() + query.len() + body.len());
    out.push_str(timestamp);
    out.push_str(method);
    out.push_str(path);
    out.push_str(query);
    out.push_str(body);
    out
}

/// Everything the dispatcher needs to put a signed request on the wire.
///
/// The encoded query and body are the exact strings that were signed, so
/// they must be transmitted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Millisecond timestamp sent as `X-FB-ACCESS-TIMESTAMP`.
    pub timestamp: String,
    /// Hex digest sent as `X-FB-ACCESS-SIGNATURE`.
    pub signature: String,
    /// Canonical query string, empty when there are no parameters.
    pub query: String,
    /// Compact JSON body, `None` when the request carries no body.
    pub body: Option<String>,
}

/// Request signer for authenticated Foxbit API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the API secret
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> Result<String, SignError> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())?;

        mac.update(message.as_bytes());
        let result = mac.finalize();
        Ok(hex::encode(result.into_bytes()))
    }

    /// Produce the signature material for one request.
    ///
    /// This method:
    /// 1. Encodes `params` canonically (see [`encode_query`])
    /// 2. Serializes `body` to compact JSON
    /// 3. Builds the pre-hash from the timestamp, method, path, query and body
    /// 4. Signs the pre-hash
    ///
    /// # Arguments
    /// * `method` - HTTP verb, hashed exactly as it will be sent
    /// * `path` - Request path starting with `/`
    /// * `params` - Optional query parameters
    /// * `body` - Optional JSON body
    /// * `timestamp_ms` - Current timestamp in milliseconds
    pub fn sign_request<B>(
        &self,
        method: &str,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<&B>,
        timestamp_ms: i64,
    ) -> Result<SignedRequest, SignError>
    where
        B: Serialize + ?Sized,
    {
        let query = match params {
            Some(p) => encode_query(p)?,
            None => String::new(),
        };

        let body = body.map(serde_json::to_string).transpose()?;

        let timestamp = timestamp_ms.to_string();
        let message = pre_hash(
            &timestamp,
            method,
            path,
            &query,
            body.as_deref().unwrap_or(""),
        );
        let signature = self.sign(&message)?;

        Ok(SignedRequest {
            timestamp,
            signature,
            query,
            body,
        })
    }
}
