//! Credential pair and authentication errors

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use super::claims::{decode_unverified, ClaimsError};

/// An access/refresh credential pair with claims derived from the
/// access token.
///
/// The expiry and subject are never supplied by callers; they are
/// always decoded from the access token, so a pair that exists is
/// internally consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    /// Short-lived credential presented on authorized requests.
    pub access_token: String,
    /// Longer-lived credential used solely to obtain a new pair.
    pub refresh_token: String,
    /// Expiry instant decoded from the access token, if claimed.
    pub expires_at: Option<DateTime<Utc>>,
    /// Subject identifier decoded from the access token, if claimed.
    pub subject: Option<String>,
}

impl CredentialPair {
    /// Builds a pair by decoding the access token's claims.
    ///
    /// # Errors
    ///
    /// Returns a [`ClaimsError`] if the access token cannot be decoded;
    /// callers must treat the pair as wholly absent in that case — an
    /// undecodable access token is never forwarded.
    pub fn from_tokens(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Result<Self, ClaimsError> {
        let access_token = access_token.into();
        let claims = decode_unverified(&access_token)?;
        let expires_at = claims
            .exp
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Ok(Self {
            access_token,
            refresh_token: refresh_token.into(),
            expires_at,
            subject: claims.sub,
        })
    }

    /// Returns the Authorization header value for this pair.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Authentication errors.
///
/// `Clone` so a single refresh outcome can fan out to every waiter on
/// the in-flight handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No refresh token is held; refresh cannot be attempted.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The refresh exchange was rejected by the server.
    #[error("refresh rejected ({status}): {message}")]
    RefreshRejected {
        /// HTTP status returned by the refresh endpoint.
        status: u16,
        /// Error body or description from the server.
        message: String,
    },

    /// The refresh exchange failed at the transport level.
    #[error("network error during refresh: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },

    /// The refresh exchange returned an unusable body or token.
    #[error("malformed refresh response: {message}")]
    MalformedResponse {
        /// Parse or decode error description.
        message: String,
    },

    /// A request was rejected as unauthorized and recovery is exhausted.
    #[error("request unauthorized")]
    Unauthorized,
}
