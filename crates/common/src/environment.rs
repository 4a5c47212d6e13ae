//! Foxbit REST endpoint configuration.
//!
//! Defaults to the production API; `FOXBIT_API_BASE_URL` may point the
//! client elsewhere (a proxy or a local mock).

use std::fmt;
use std::str::FromStr;

/// Production REST API base URL.
pub const DEFAULT_REST_BASE_URL: &str = "https://api.foxbit.com.br";

/// Environment variable that overrides the base URL.
pub const BASE_URL_VAR: &str = "FOXBIT_API_BASE_URL";

/// Validated base URL for REST calls, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestEndpoint {
    base_url: String,
}

impl RestEndpoint {
    /// Validate and wrap a base URL.
    ///
    /// The URL must use `http` or `https` and name a host. A trailing `/`
    /// is removed so paths can be appended directly.
    pub fn new(base_url: &str) -> Result<Self, ParseEndpointError> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| ParseEndpointError(base_url.to_string()))?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() || host.starts_with([':', '?', '#']) {
            return Err(ParseEndpointError(base_url.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// REST API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if this is the production API.
    pub fn is_production(&self) -> bool {
        self.base_url == DEFAULT_REST_BASE_URL
    }

    /// Load the endpoint from `FOXBIT_API_BASE_URL`.
    ///
    /// Returns the production endpoint if the variable is not set.
    pub fn from_env() -> Result<Self, ParseEndpointError> {
        match std::env::var(BASE_URL_VAR) {
            Ok(url) => url.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for RestEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REST_BASE_URL.to_string(),
        }
    }
}

impl fmt::Display for RestEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

impl FromStr for RestEndpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error parsing a base URL.
#[derive(Debug, Clone)]
pub struct ParseEndpointError(String);

impl fmt::Display for ParseEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid base URL '{}', expected http(s)://host[:port]",
            self.0
        )
    }
}

impl std::error::Error for ParseEndpointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        let endpoint = RestEndpoint::default();
        assert_eq!(endpoint.base_url(), "https://api.foxbit.com.br");
        assert!(endpoint.is_production());
    }

    #[test]
    fn test_strips_trailing_slash() {
        let endpoint = RestEndpoint::new("https://api.foxbit.com.br/").unwrap();
        assert_eq!(endpoint.base_url(), "https://api.foxbit.com.br");
        assert!(endpoint.is_production());
    }

    #[test]
    fn test_accepts_local_http() {
        let endpoint: RestEndpoint = "http://127.0.0.1:8080".parse().unwrap();
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:8080");
        assert!(!endpoint.is_production());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("api.foxbit.com.br".parse::<RestEndpoint>().is_err());
        assert!("ftp://api.foxbit.com.br".parse::<RestEndpoint>().is_err());
        assert!("https://".parse::<RestEndpoint>().is_err());
        assert!("".parse::<RestEndpoint>().is_err());
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!("https://:8080".parse::<RestEndpoint>().is_err());
        assert!("https://?x=1".parse::<RestEndpoint>().is_err());
        assert!("http://#frag".parse::<RestEndpoint>().is_err());
        assert!("http://localhost:8080".parse::<RestEndpoint>().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RestEndpoint::default().to_string(),
            "https://api.foxbit.com.br"
        );
    }

    #[test]
    fn test_error_message_names_input() {
        let err = "nope".parse::<RestEndpoint>().unwrap_err();
        assert!(err.to_string().contains("'nope'"));
    }
}
