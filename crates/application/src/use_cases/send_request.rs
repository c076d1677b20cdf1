//! Send Request use case.
//!
//! The outbound pipeline for business calls: authorize, execute, and
//! on an unauthorized response drive the retry-once-then-redirect
//! policy. At most one refresh-and-retry cycle runs per original
//! request, so a replay that still comes back unauthorized can never
//! loop.

use std::sync::Arc;

use lanyard_domain::{ApiConfig, ApiRequest, ApiResponse, AuthError};

use crate::auth::{RefreshCoordinator, RequestAuthorizer, TokenStore};
use crate::error::ApplicationResult;
use crate::ports::{HttpClient, SessionGateway};
use crate::use_cases::end_authenticated_session;

/// Use case for sending authorized API requests.
pub struct SendRequest {
    config: ApiConfig,
    client: Arc<dyn HttpClient>,
    store: Arc<TokenStore>,
    coordinator: Arc<RefreshCoordinator>,
    authorizer: RequestAuthorizer,
    session: Arc<dyn SessionGateway>,
}

impl SendRequest {
    /// Creates the use case over shared auth components.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        client: Arc<dyn HttpClient>,
        store: Arc<TokenStore>,
        coordinator: Arc<RefreshCoordinator>,
        session: Arc<dyn SessionGateway>,
    ) -> Self {
        let authorizer =
            RequestAuthorizer::new(config.clone(), Arc::clone(&store), Arc::clone(&coordinator));
        Self {
            config,
            client,
            store,
            coordinator,
            authorizer,
            session,
        }
    }

    /// Sends a request through the authorization pipeline.
    ///
    /// # Errors
    ///
    /// Transport errors pass through untouched. An unauthorized
    /// response that survives the single refresh-and-replay cycle (or
    /// that came from the auth surface itself) surfaces as
    /// [`AuthError`] after the session has been terminated.
    pub async fn send(&self, request: ApiRequest) -> ApplicationResult<ApiResponse> {
        let authorized = self.authorizer.authorize(request.clone()).await;
        let response = self.client.execute(&authorized).await?;

        if !response.is_unauthorized() {
            return Ok(response);
        }
        // A 401 from the auth surface other than the refresh exchange
        // (e.g. a rejected login) is a business outcome for the caller,
        // not a credential problem.
        if self.config.is_exempt(&request.path) && !self.config.is_refresh_path(&request.path) {
            return Ok(response);
        }
        self.recover_unauthorized(request).await
    }

    /// Drives the per-request failure state machine after the first
    /// unauthorized response.
    async fn recover_unauthorized(&self, original: ApiRequest) -> ApplicationResult<ApiResponse> {
        // An unauthorized refresh exchange is terminal: retrying would
        // loop through the same endpoint.
        if self.config.is_refresh_path(&original.path) || original.attempt >= 1 {
            self.terminate().await;
            return Err(AuthError::Unauthorized.into());
        }

        match self.coordinator.refresh().await {
            Ok(access_token) => {
                let replay = original.as_replay().with_bearer(&access_token);
                let response = self.client.execute(&replay).await?;
                if response.is_unauthorized() {
                    // The replayed call failed authorization for an
                    // unrelated reason; absorbing state, no second
                    // refresh.
                    self.terminate().await;
                    return Err(AuthError::Unauthorized.into());
                }
                Ok(response)
            }
            Err(error) => {
                self.terminate().await;
                Err(error.into())
            }
        }
    }

    async fn terminate(&self) {
        end_authenticated_session(&self.config, &self.store, &self.session).await;
    }
}
