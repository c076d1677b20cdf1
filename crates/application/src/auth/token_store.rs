//! In-memory credential storage with expiry tracking.
//!
//! Holds the single access/refresh pair for the session. The expiry
//! instant is always derived from the access token's claims, never
//! supplied by a caller.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use lanyard_domain::CredentialPair;

use crate::ports::Clock;

/// Default safety margin: a token within 5 minutes of expiry is
/// treated as expiring so it is never forwarded likely to lapse
/// mid-flight.
pub const DEFAULT_SAFETY_MARGIN: Duration = Duration::from_secs(5 * 60);

/// Thread-safe store for the session's credential pair.
///
/// Constructed explicitly and shared via `Arc`; tests instantiate
/// isolated instances with their own clock.
pub struct TokenStore {
    credentials: RwLock<Option<CredentialPair>>,
    clock: Arc<dyn Clock>,
    safety_margin: chrono::Duration,
}

impl TokenStore {
    /// Creates an empty store with the default safety margin.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_safety_margin(clock, DEFAULT_SAFETY_MARGIN)
    }

    /// Creates an empty store with a custom safety margin.
    #[must_use]
    pub fn with_safety_margin(clock: Arc<dyn Clock>, margin: Duration) -> Self {
        Self {
            credentials: RwLock::new(None),
            clock,
            safety_margin: chrono::Duration::from_std(margin)
                .unwrap_or_else(|_| chrono::Duration::seconds(300)),
        }
    }

    /// Stores a new credential pair, replacing any held pair wholesale.
    ///
    /// On decode failure the store is cleared instead: an undecodable
    /// access token must never be forwarded, and partial state is never
    /// observable. No error escapes; the return value reports whether a
    /// pair is now held.
    pub async fn set_credentials(&self, access_token: &str, refresh_token: &str) -> bool {
        let mut credentials = self.credentials.write().await;
        match CredentialPair::from_tokens(access_token, refresh_token) {
            Ok(pair) => {
                *credentials = Some(pair);
                true
            }
            Err(_) => {
                *credentials = None;
                false
            }
        }
    }

    /// Unconditionally empties the store. Idempotent.
    pub async fn clear(&self) {
        *self.credentials.write().await = None;
    }

    /// Returns true if no usable credential is held: no pair, no expiry
    /// claim, expiry in the past, or expiry within the safety margin.
    pub async fn is_expiring_soon(&self) -> bool {
        let credentials = self.credentials.read().await;
        match credentials.as_ref().and_then(|pair| pair.expires_at) {
            Some(expires_at) => self.clock.now() + self.safety_margin >= expires_at,
            None => true,
        }
    }

    /// The decoded subject of the held access token, if any.
    pub async fn identity(&self) -> Option<String> {
        self.credentials
            .read()
            .await
            .as_ref()
            .and_then(|pair| pair.subject.clone())
    }

    /// The held access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.credentials
            .read()
            .await
            .as_ref()
            .map(|pair| pair.access_token.clone())
    }

    /// The held refresh token, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.credentials
            .read()
            .await
            .as_ref()
            .map(|pair| pair.refresh_token.clone())
    }

    /// A snapshot of the held pair, if any.
    pub async fn credentials(&self) -> Option<CredentialPair> {
        self.credentials.read().await.clone()
    }
}
