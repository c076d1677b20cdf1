//! Complete Login use case.
//!
//! Applies the credential pair returned by a successful login
//! (password or external provider) and resumes the navigation the
//! forced re-authentication interrupted.

use std::sync::Arc;

use lanyard_domain::{ApiConfig, AuthError};

use crate::auth::TokenStore;
use crate::error::ApplicationResult;
use crate::ports::SessionGateway;

/// Use case for finishing a login flow.
pub struct CompleteLogin {
    config: ApiConfig,
    store: Arc<TokenStore>,
    session: Arc<dyn SessionGateway>,
}

impl CompleteLogin {
    /// Creates the use case.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<TokenStore>, session: Arc<dyn SessionGateway>) -> Self {
        Self {
            config,
            store,
            session,
        }
    }

    /// Stores the pair and navigates to the pending return path,
    /// consuming it; falls back to the home route. Returns the
    /// destination navigated to.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedResponse`] when the access token
    /// cannot be decoded; the store is left empty and no navigation
    /// happens, so the login surface can surface the failure.
    pub async fn run(&self, access_token: &str, refresh_token: &str) -> ApplicationResult<String> {
        if !self.store.set_credentials(access_token, refresh_token).await {
            return Err(AuthError::MalformedResponse {
                message: "login returned an undecodable access token".to_string(),
            }
            .into());
        }

        let destination = self
            .session
            .take_return_path()
            .unwrap_or_else(|| self.config.home_route.clone());
        self.session.navigate_to(&destination);
        Ok(destination)
    }
}
