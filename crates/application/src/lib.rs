//! Lanyard Application - Token lifecycle and request authorization
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The token store, refresh coordinator and request authorizer
//! - Use case orchestration for sending, bootstrap and login
//! - Application-level error handling

pub mod auth;
pub mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{RefreshCoordinator, RequestAuthorizer, TokenStore};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, HttpClient, HttpClientError, SessionGateway, TokenExchange, TokenPair};
pub use use_cases::{BootstrapOutcome, BootstrapSession, CompleteLogin, SendRequest};
