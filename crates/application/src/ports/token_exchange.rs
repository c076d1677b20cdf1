//! Token exchange port

use async_trait::async_trait;
use serde::Deserialize;

use lanyard_domain::AuthError;

/// Wire shape of a successful refresh exchange.
///
/// Both fields are required; a response missing either is malformed
/// and the adapter reports it as a refresh failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    /// The new access token.
    pub access_token: String,
    /// The rotated refresh token.
    pub refresh_token: String,
}

/// Port for the network exchange that trades a refresh token for a new
/// access/refresh pair.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Performs the refresh exchange.
    ///
    /// # Errors
    ///
    /// Any non-success status, transport failure or malformed body is
    /// an [`AuthError`]; the server's verdict is authoritative
    /// regardless of the client's own expiry belief.
    async fn exchange(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}
