//! Outbound request authorization.

use std::sync::Arc;

use lanyard_domain::{ApiConfig, ApiRequest};

use crate::auth::{RefreshCoordinator, TokenStore};

/// Attaches bearer credentials to outbound requests and triggers a
/// proactive refresh when the held credential is inside the safety
/// margin.
///
/// Calls directed at the authentication surface itself (login,
/// provider discovery, refresh, health) pass through untouched so the
/// authorization logic never recurses into itself.
pub struct RequestAuthorizer {
    config: ApiConfig,
    store: Arc<TokenStore>,
    coordinator: Arc<RefreshCoordinator>,
}

impl RequestAuthorizer {
    /// Creates an authorizer.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        store: Arc<TokenStore>,
        coordinator: Arc<RefreshCoordinator>,
    ) -> Self {
        Self {
            config,
            store,
            coordinator,
        }
    }

    /// Authorizes an outbound request.
    ///
    /// A failed proactive refresh does not abort the request: it
    /// proceeds without a credential and fails downstream through the
    /// normal error path rather than being silently dropped.
    pub async fn authorize(&self, request: ApiRequest) -> ApiRequest {
        if self.config.is_exempt(&request.path) {
            return request;
        }

        if self.store.is_expiring_soon().await {
            let _ = self.coordinator.refresh().await;
        }

        match self.store.access_token().await {
            Some(token) => request.with_bearer(&token),
            None => request,
        }
    }
}
