//! Lanyard Domain - Core types for the token lifecycle subsystem
//!
//! This crate defines the domain model for the Lanyard auth client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod config;
pub mod request;
pub mod response;

pub use auth::{decode_unverified, AccessClaims, AuthError, ClaimsError, CredentialPair};
pub use config::ApiConfig;
pub use request::{ApiRequest, HttpMethod};
pub use response::ApiResponse;
