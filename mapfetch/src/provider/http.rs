//! HTTP client abstraction for testability

use std::time::Duration;

use reqwest::header::USER_AGENT;

use super::types::ProviderError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Outcome of a completed HTTP exchange.
///
/// Status classification (200 / 404 / other) belongs to the fetch pipeline,
/// so the client hands back whatever the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric status code.
    pub status: u16,
    /// Status line text such as `"404 Not Found"`.
    pub status_text: String,
    /// Response body. Only read for successful responses.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Builds a `200 OK` response carrying `body`.
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            status_text: "200 OK".to_string(),
            body,
        }
    }

    /// Builds a body-less response with the given status.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: Vec::new(),
        }
    }
}

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `user_agent` - Value for the `User-Agent` header
    ///
    /// # Returns
    ///
    /// The server's response, or an error if no response was received
    /// (DNS failure, connection refused, timeout).
    fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::HttpClient(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, ProviderError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .map_err(|e| ProviderError::HttpClient(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(HttpResponse::status(status.as_u16(), status.to_string()));
        }

        let body = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::HttpClient(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.to_string(),
            body,
        })
    }
}
