//! Single-flight refresh coordination.
//!
//! Concurrent callers that observe an expiring credential collapse onto
//! one network exchange: the first caller creates the in-flight handle
//! and runs the exchange, later callers subscribe to the handle and
//! await the shared outcome. The handle is destroyed unconditionally
//! when the exchange settles, so a later expiry can start a fresh
//! attempt.

use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};

use lanyard_domain::AuthError;

use crate::auth::TokenStore;
use crate::ports::TokenExchange;

type RefreshOutcome = Result<String, AuthError>;

/// Coordinates the refresh exchange and guarantees single-flight.
///
/// The coordinator is the only writer of the token store during a
/// refresh, and it replaces the pair in one atomic step.
pub struct RefreshCoordinator {
    store: Arc<TokenStore>,
    exchange: Arc<dyn TokenExchange>,
    in_flight: Mutex<Option<broadcast::Sender<RefreshOutcome>>>,
}

impl RefreshCoordinator {
    /// Creates a coordinator over the given store and exchange port.
    #[must_use]
    pub fn new(store: Arc<TokenStore>, exchange: Arc<dyn TokenExchange>) -> Self {
        Self {
            store,
            exchange,
            in_flight: Mutex::new(None),
        }
    }

    /// Refreshes the credential pair, returning the new access token.
    ///
    /// If a refresh is already executing, awaits that one instead of
    /// starting a second network call. With no refresh token held, the
    /// call fails immediately and no handle is created.
    ///
    /// # Errors
    ///
    /// Returns the shared [`AuthError`] when the exchange fails; every
    /// waiter on the same in-flight handle receives the same outcome,
    /// and the store is cleared.
    pub async fn refresh(&self) -> RefreshOutcome {
        let refresh_token = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(handle) = in_flight.as_ref() {
                let mut waiter = handle.subscribe();
                drop(in_flight);
                return match waiter.recv().await {
                    Ok(outcome) => outcome,
                    // The handle settled without an outcome; report it
                    // as a transport failure.
                    Err(_) => Err(AuthError::Network {
                        message: "refresh settled without an outcome".to_string(),
                    }),
                };
            }

            let Some(refresh_token) = self.store.refresh_token().await else {
                return Err(AuthError::MissingRefreshToken);
            };

            let (handle, _) = broadcast::channel(1);
            *in_flight = Some(handle);
            refresh_token
        };

        let outcome = self.run_exchange(&refresh_token).await;

        // Destroy the handle regardless of outcome, then settle every
        // waiter that subscribed to it.
        let handle = self.in_flight.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.send(outcome.clone());
        }
        outcome
    }

    async fn run_exchange(&self, refresh_token: &str) -> RefreshOutcome {
        match self.exchange.exchange(refresh_token).await {
            Ok(pair) => {
                if self
                    .store
                    .set_credentials(&pair.access_token, &pair.refresh_token)
                    .await
                {
                    Ok(pair.access_token)
                } else {
                    // The store cleared itself on the decode failure.
                    Err(AuthError::MalformedResponse {
                        message: "refresh returned an undecodable access token".to_string(),
                    })
                }
            }
            Err(error) => {
                self.store.clear().await;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{token_with_claims, MockClock, StubExchange};

    async fn store_with_expiring_pair(now: i64) -> Arc<TokenStore> {
        let store = Arc::new(TokenStore::new(Arc::new(MockClock::at(now))));
        // Expires in two minutes, inside the five minute margin.
        let token = token_with_claims(&serde_json::json!({ "exp": now + 120, "sub": "u" }));
        assert!(store.set_credentials(&token, "refresh-old").await);
        assert!(store.is_expiring_soon().await);
        store
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_refreshes_share_one_exchange() {
        let now = 1_000_000i64;
        let store = store_with_expiring_pair(now).await;
        let fresh = token_with_claims(&serde_json::json!({ "exp": now + 3600 }));
        let exchange = Arc::new(StubExchange::succeeding(&fresh, "refresh-new").with_delay_ms(50));
        let coordinator = RefreshCoordinator::new(Arc::clone(&store), exchange.clone());

        let (a, b, c) = tokio::join!(
            coordinator.refresh(),
            coordinator.refresh(),
            coordinator.refresh()
        );

        assert_eq!(exchange.calls(), 1);
        let token = a.unwrap();
        assert_eq!(token, fresh);
        assert_eq!(b.unwrap(), token);
        assert_eq!(c.unwrap(), token);
        assert_eq!(store.access_token().await.as_deref(), Some(fresh.as_str()));
        assert_eq!(
            store.refresh_token().await.as_deref(),
            Some("refresh-new")
        );
    }

    #[tokio::test]
    async fn test_missing_refresh_token_fails_without_network() {
        let store = Arc::new(TokenStore::new(Arc::new(MockClock::at(0))));
        let exchange = Arc::new(StubExchange::succeeding("unused", "unused"));
        let coordinator = RefreshCoordinator::new(store, exchange.clone());

        let result = coordinator.refresh().await;
        assert_eq!(result, Err(AuthError::MissingRefreshToken));
        assert_eq!(exchange.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_exchange_clears_store_and_rejects_all_waiters() {
        let now = 1_000_000i64;
        let store = store_with_expiring_pair(now).await;
        let error = AuthError::RefreshRejected {
            status: 401,
            message: "invalid_grant".to_string(),
        };
        let exchange = Arc::new(StubExchange::failing(error.clone()).with_delay_ms(50));
        let coordinator = RefreshCoordinator::new(Arc::clone(&store), exchange.clone());

        let (a, b) = tokio::join!(coordinator.refresh(), coordinator.refresh());

        assert_eq!(exchange.calls(), 1);
        assert_eq!(a, Err(error.clone()));
        assert_eq!(b, Err(error));
        assert!(store.credentials().await.is_none());
    }

    #[tokio::test]
    async fn test_handle_is_destroyed_after_settlement() {
        let now = 1_000_000i64;
        let store = store_with_expiring_pair(now).await;
        let fresh = token_with_claims(&serde_json::json!({ "exp": now + 3600 }));
        let exchange = Arc::new(StubExchange::succeeding(&fresh, "refresh-new"));
        let coordinator = RefreshCoordinator::new(Arc::clone(&store), exchange.clone());

        coordinator.refresh().await.unwrap();
        // A second sequential refresh starts a fresh exchange.
        coordinator.refresh().await.unwrap();
        assert_eq!(exchange.calls(), 2);
    }

    #[tokio::test]
    async fn test_undecodable_access_token_in_response_is_a_failure() {
        let now = 1_000_000i64;
        let store = store_with_expiring_pair(now).await;
        let exchange = Arc::new(StubExchange::succeeding("not-a-jwt", "refresh-new"));
        let coordinator = RefreshCoordinator::new(Arc::clone(&store), exchange);

        let result = coordinator.refresh().await;
        assert!(matches!(result, Err(AuthError::MalformedResponse { .. })));
        assert!(store.credentials().await.is_none());
    }
}
