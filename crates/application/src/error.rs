//! Application error types

use thiserror::Error;

use lanyard_domain::AuthError;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// An authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// An HTTP request failed at the transport level. These are never
    /// interpreted or retried by the auth subsystem.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
