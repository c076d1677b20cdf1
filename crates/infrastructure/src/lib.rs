//! Lanyard Infrastructure - Adapters for the application ports
//!
//! Concrete implementations of the application layer's ports: the
//! reqwest HTTP client, the reqwest token exchange, the system clock
//! and an in-memory session gateway.

pub mod adapters;
pub mod auth;
pub mod session;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use auth::ReqwestTokenExchange;
pub use session::MemorySessionGateway;
