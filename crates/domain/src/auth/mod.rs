//! Credential and claims types

mod claims;
mod types;

pub use claims::{decode_unverified, AccessClaims, ClaimsError};
pub use types::{AuthError, CredentialPair};
