//! In-memory session gateway.
//!
//! Keeps the current route and the session-scoped storage in process
//! memory. Hosts with a real navigation stack implement the same port
//! against their own router; this adapter serves embedded hosts and
//! tests.

use std::collections::HashMap;
use std::sync::Mutex;

use lanyard_application::ports::SessionGateway;
use lanyard_domain::config::RETURN_PATH_KEY;

struct SessionState {
    route: String,
    storage: HashMap<String, String>,
}

/// Process-local session gateway.
pub struct MemorySessionGateway {
    login_route: String,
    state: Mutex<SessionState>,
}

impl MemorySessionGateway {
    /// Creates a gateway starting at the given route.
    #[must_use]
    pub fn new(initial_route: impl Into<String>, login_route: impl Into<String>) -> Self {
        Self {
            login_route: login_route.into(),
            state: Mutex::new(SessionState {
                route: initial_route.into(),
                storage: HashMap::new(),
            }),
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, SessionState> {
        // A poisoned session mutex means a panicked writer; the route
        // state itself is still coherent strings.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SessionGateway for MemorySessionGateway {
    fn current_route(&self) -> String {
        self.locked().route.clone()
    }

    fn navigate_to(&self, route: &str) {
        self.locked().route = route.to_string();
    }

    fn redirect_to_login(&self) {
        let login = self.login_route.clone();
        self.locked().route = login;
    }

    fn stash_return_path(&self, route: &str) {
        self.locked()
            .storage
            .insert(RETURN_PATH_KEY.to_string(), route.to_string());
    }

    fn peek_return_path(&self) -> Option<String> {
        self.locked().storage.get(RETURN_PATH_KEY).cloned()
    }

    fn take_return_path(&self) -> Option<String> {
        self.locked().storage.remove(RETURN_PATH_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_navigation_and_redirect() {
        let gateway = MemorySessionGateway::new("/projects/42", "/login");
        assert_eq!(gateway.current_route(), "/projects/42");

        gateway.redirect_to_login();
        assert_eq!(gateway.current_route(), "/login");

        gateway.navigate_to("/projects/42");
        assert_eq!(gateway.current_route(), "/projects/42");
    }

    #[test]
    fn test_return_path_consumed_once() {
        let gateway = MemorySessionGateway::new("/", "/login");
        assert_eq!(gateway.take_return_path(), None);

        gateway.stash_return_path("/projects/42");
        assert_eq!(gateway.take_return_path().as_deref(), Some("/projects/42"));
        assert_eq!(gateway.take_return_path(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let gateway = MemorySessionGateway::new("/", "/login");
        assert_eq!(gateway.peek_return_path(), None);

        gateway.stash_return_path("/projects/42");
        assert_eq!(gateway.peek_return_path().as_deref(), Some("/projects/42"));
        assert_eq!(gateway.peek_return_path().as_deref(), Some("/projects/42"));
        assert_eq!(gateway.take_return_path().as_deref(), Some("/projects/42"));
        assert_eq!(gateway.peek_return_path(), None);
    }

    #[test]
    fn test_stash_overwrites_previous_path() {
        let gateway = MemorySessionGateway::new("/", "/login");
        gateway.stash_return_path("/a");
        gateway.stash_return_path("/b");
        assert_eq!(gateway.take_return_path().as_deref(), Some("/b"));
    }
}
