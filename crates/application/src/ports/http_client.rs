//! HTTP Client port

use async_trait::async_trait;
use thiserror::Error;

use lanyard_domain::{ApiRequest, ApiResponse};

/// Errors from the HTTP transport.
///
/// `Clone` so a transported failure can be compared and surfaced
/// without consuming it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests against the remote API.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries. A
/// non-2xx status is *not* an error here; it is returned as a response
/// so the caller can run its own failure handling.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures (network,
    /// timeout); these pass through the auth subsystem untouched.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, HttpClientError>;
}
