//! Use case orchestration

mod bootstrap_session;
mod complete_login;
mod send_request;

pub use bootstrap_session::{BootstrapOutcome, BootstrapSession};
pub use complete_login::CompleteLogin;
pub use send_request::SendRequest;

use std::sync::Arc;

use lanyard_domain::ApiConfig;

use crate::auth::TokenStore;
use crate::ports::SessionGateway;

/// Terminal authentication failure path shared by the use cases:
/// clear the credentials, capture the interrupted route as the pending
/// return path (unless the user is already on the login surface), and
/// redirect to login.
pub(crate) async fn end_authenticated_session(
    config: &ApiConfig,
    store: &TokenStore,
    session: &Arc<dyn SessionGateway>,
) {
    store.clear().await;
    let route = session.current_route();
    if route != config.login_route {
        session.stash_return_path(&route);
    }
    session.redirect_to_login();
}
