//! Session Bootstrap use case.
//!
//! Runs once at application start to decide whether stored credentials
//! are usable, refresh them if possible, and otherwise hand the user to
//! the login surface with their intended destination preserved.

use std::sync::Arc;

use lanyard_domain::ApiConfig;

use crate::auth::{RefreshCoordinator, TokenStore};
use crate::ports::SessionGateway;
use crate::use_cases::end_authenticated_session;

/// How the bootstrap settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Usable credentials are held; the application can proceed.
    Ready,
    /// Credentials were unusable; state is cleared and the user was
    /// redirected to login with the return path stashed.
    RedirectedToLogin,
}

/// Use case for the once-per-session credential bootstrap.
pub struct BootstrapSession {
    config: ApiConfig,
    store: Arc<TokenStore>,
    coordinator: Arc<RefreshCoordinator>,
    session: Arc<dyn SessionGateway>,
}

impl BootstrapSession {
    /// Creates the use case over shared auth components.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        store: Arc<TokenStore>,
        coordinator: Arc<RefreshCoordinator>,
        session: Arc<dyn SessionGateway>,
    ) -> Self {
        Self {
            config,
            store,
            coordinator,
            session,
        }
    }

    /// Decides whether the session can start authenticated.
    ///
    /// A usable access token means no network call at all; a held
    /// refresh token gets one refresh attempt; anything else ends the
    /// session.
    pub async fn run(&self) -> BootstrapOutcome {
        if !self.store.is_expiring_soon().await {
            return BootstrapOutcome::Ready;
        }

        let refreshed = match self.store.refresh_token().await {
            Some(_) => self.coordinator.refresh().await.is_ok(),
            None => false,
        };
        if refreshed {
            return BootstrapOutcome::Ready;
        }

        end_authenticated_session(&self.config, &self.store, &self.session).await;
        BootstrapOutcome::RedirectedToLogin
    }
}
