//! Session gateway port

/// Port for the host environment's navigation and session-scoped
/// storage.
///
/// A redirect to the login surface is the de facto cancellation of all
/// pending flows; the host wires this seam to its own navigation
/// mechanism, keeping the coordination logic free of any UI API.
pub trait SessionGateway: Send + Sync {
    /// The route the user is currently on.
    fn current_route(&self) -> String;

    /// Navigates to the given route.
    fn navigate_to(&self, route: &str);

    /// Redirects to the login surface, tearing down the authenticated
    /// session context.
    fn redirect_to_login(&self);

    /// Persists the route the user was trying to reach, for the
    /// lifetime of one authentication attempt.
    fn stash_return_path(&self, route: &str);

    /// Reads the pending return path without consuming it, so a login
    /// surface can show where the user will land.
    fn peek_return_path(&self) -> Option<String>;

    /// Consumes the pending return path, if one is stashed. Subsequent
    /// calls return `None` until a new path is stashed.
    fn take_return_path(&self) -> Option<String>;
}
