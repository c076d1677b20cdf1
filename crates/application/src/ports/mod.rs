//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait that can be implemented by adapters in
//! the infrastructure layer, or by mocks in tests.

mod clock;
mod http_client;
mod session;
mod token_exchange;

pub use clock::Clock;
pub use http_client::{HttpClient, HttpClientError};
pub use session::SessionGateway;
pub use token_exchange::{TokenExchange, TokenPair};
