//! Response specification type

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// The single status value that triggers the authorization failure
/// handling state machine. 403 and every other status pass through to
/// the caller untouched.
pub const UNAUTHORIZED: u16 = 401;

/// Response from an outbound API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if this response is an authorization failure.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == UNAUTHORIZED
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if the body is not valid
    /// JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The body interpreted as UTF-8 text, lossily.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
