//! Unverified access-token claims decoding.
//!
//! The client only needs the embedded expiry and subject to schedule
//! proactive refreshes and key profile lookups. Signature verification
//! stays on the server; the server remains authoritative for every
//! refresh-exchange decision regardless of what is decoded here.

use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// Claims extracted from the payload segment of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessClaims {
    /// Subject identifier, used to key cached user-profile lookups.
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiration time as Unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at time as Unix seconds.
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Errors produced while decoding a compact token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimsError {
    /// The token does not have the three dot-separated segments.
    #[error("malformed token: expected three segments")]
    MalformedStructure,

    /// The payload segment is not valid URL-safe base64.
    #[error("invalid payload encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded payload is not a valid JSON claims object.
    #[error("invalid claims payload: {0}")]
    InvalidPayload(String),
}

/// Decodes the claims of a compact JWS token without verifying it.
///
/// # Errors
///
/// Returns a [`ClaimsError`] if the token is not three dot-separated
/// segments, the payload is not URL-safe base64, or the payload is not
/// a JSON object.
pub fn decode_unverified(token: &str) -> Result<AccessClaims, ClaimsError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimsError::MalformedStructure);
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| ClaimsError::InvalidEncoding(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| ClaimsError::InvalidPayload(e.to_string()))
}
