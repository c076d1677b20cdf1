//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest
//! library. Statuses are returned as responses, never mapped to
//! errors; the application layer runs its own failure handling.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use lanyard_application::ports::{HttpClient, HttpClientError};
use lanyard_domain::{ApiConfig, ApiRequest, ApiResponse, HttpMethod};

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
    config: ApiConfig,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client for the configured API.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - User-Agent: "Lanyard/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: ApiConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent("Lanyard/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Creates a client around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }
        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }
        HttpClientError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, HttpClientError> {
        let url = self.config.url_for(&request.path);

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), &url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(ApiResponse::new(status, headers, body))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new(ApiConfig::new("https://api.example.com"));
        assert!(client.is_ok());
    }
}
