//! Token store, refresh coordination and request authorization

mod authorizer;
mod refresh;
mod token_store;

pub use authorizer::RequestAuthorizer;
pub use refresh::RefreshCoordinator;
pub use token_store::TokenStore;
