//! Request specification type

use serde::{Deserialize, Serialize};

/// HTTP methods supported for outbound API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET request
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// PATCH request
    Patch,
    /// DELETE request
    Delete,
}

/// Specification for an outbound API request.
///
/// Carries an explicit `attempt` counter instead of a mutable
/// "already retried" marker on shared request state, so replays under
/// concurrency cannot alias each other.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Request path relative to the API base URL, starting with '/'.
    pub path: String,
    /// HTTP headers as name/value pairs.
    pub headers: Vec<(String, String)>,
    /// Optional JSON body.
    pub body: Option<serde_json::Value>,
    /// Zero-based delivery attempt; 1 marks the single authorized
    /// replay after a refresh.
    pub attempt: u32,
}

impl ApiRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
            attempt: 0,
        }
    }

    /// Creates a GET request for the given path.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(HttpMethod::Post, path);
        request.body = Some(body);
        request
    }

    /// Returns a copy carrying the given bearer credential, replacing
    /// any Authorization header already present.
    #[must_use]
    pub fn with_bearer(mut self, access_token: &str) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {access_token}")));
        self
    }

    /// Returns a copy marked as the post-refresh replay.
    #[must_use]
    pub fn as_replay(mut self) -> Self {
        self.attempt += 1;
        self
    }

    /// The current Authorization header value, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_defaults() {
        let request = ApiRequest::get("/projects/42");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/projects/42");
        assert_eq!(request.attempt, 0);
        assert!(request.authorization().is_none());
    }

    #[test]
    fn test_with_bearer_replaces_existing_header() {
        let request = ApiRequest::get("/users/me")
            .with_bearer("old-token")
            .with_bearer("new-token");

        assert_eq!(request.authorization(), Some("Bearer new-token"));
        let auth_headers = request
            .headers
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
            .count();
        assert_eq!(auth_headers, 1);
    }

    #[test]
    fn test_as_replay_increments_attempt() {
        let replay = ApiRequest::get("/projects/42").as_replay();
        assert_eq!(replay.attempt, 1);
    }
}
