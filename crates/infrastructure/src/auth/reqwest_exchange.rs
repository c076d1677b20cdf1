//! Refresh exchange implementation using reqwest.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use lanyard_application::ports::{TokenExchange, TokenPair};
use lanyard_domain::{ApiConfig, AuthError};

/// Error body shape some deployments return on a rejected exchange.
#[derive(Debug, Deserialize)]
struct ExchangeErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Token exchange implementation posting JSON to the refresh endpoint.
pub struct ReqwestTokenExchange {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTokenExchange {
    /// Creates an exchange client for the configured refresh endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Network`] if the underlying client cannot
    /// be created.
    pub fn new(config: ApiConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?;
        Ok(Self { client, config })
    }

    /// Creates an exchange around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl TokenExchange for ReqwestTokenExchange {
    async fn exchange(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let url = self.config.url_for(&self.config.refresh_path);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| AuthError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ExchangeErrorBody>(&text)
                .map_or(text, |body| body.error_description.unwrap_or(body.error));
            return Err(AuthError::RefreshRejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<TokenPair>()
            .await
            .map_err(|e| AuthError::MalformedResponse {
                message: e.to_string(),
            })
    }
}
