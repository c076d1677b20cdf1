//! API endpoint and route configuration.
//!
//! A plain value constructed by the host and passed down to the
//! components that need it; no ambient global state.

use std::time::Duration;

/// Well-known session-scoped key under which the pending return path
/// is persisted, consumed exactly once on the next successful login.
pub const RETURN_PATH_KEY: &str = "lanyard.return_path";

/// Endpoint and routing configuration for the auth subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
    /// Path of the refresh exchange endpoint.
    pub refresh_path: String,
    /// Path prefixes that bypass authorization entirely: login,
    /// provider discovery, refresh, health/status.
    pub exempt_paths: Vec<String>,
    /// Route of the login surface users are redirected to.
    pub login_route: String,
    /// Default destination after login when no return path is pending.
    pub home_route: String,
    /// Safety margin subtracted from the access token's expiry.
    pub safety_margin: Duration,
}

impl ApiConfig {
    /// Creates a configuration for the given API base URL with the
    /// default paths and a 5 minute safety margin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            refresh_path: "/auth/refresh".to_string(),
            exempt_paths: vec![
                "/auth/login".to_string(),
                "/auth/providers".to_string(),
                "/auth/refresh".to_string(),
                "/health".to_string(),
            ],
            login_route: "/login".to_string(),
            home_route: "/".to_string(),
            safety_margin: Duration::from_secs(5 * 60),
        }
    }

    /// Overrides the safety margin.
    #[must_use]
    pub const fn with_safety_margin(mut self, margin: Duration) -> Self {
        self.safety_margin = margin;
        self
    }

    /// Returns true if the path is exempt from authorization logic.
    ///
    /// Exempt calls never trigger a proactive refresh and never carry a
    /// bearer credential, so the auth surface cannot recurse into
    /// itself.
    #[must_use]
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Returns true if the path is the refresh exchange endpoint.
    #[must_use]
    pub fn is_refresh_path(&self, path: &str) -> bool {
        path == self.refresh_path
    }

    /// Absolute URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
