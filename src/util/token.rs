//! Structural session-token decoding.
//!
//! The JWT payload is decoded locally only to recover the `username` claim
//! for the profile fetch. The signature is never verified client-side and
//! the token is never trusted for authorization decisions.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Failure modes when extracting the username claim from a stored token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The value does not have the three dot-separated JWT segments.
    #[error("token is not a three-segment JWT")]
    Malformed,
    /// The payload segment is not base64url-encoded JSON.
    #[error("token payload did not decode to JSON")]
    Payload,
    /// The payload decoded but carries no usable `username` claim.
    #[error("token payload has no username claim")]
    MissingUsername,
}

#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    username: Option<String>,
}

/// Extract the `username` claim from a JWT without verifying its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] describing the first structural problem found.
pub fn decode_username(token: &str) -> Result<String, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Payload)?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)?;

    match claims.username {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(TokenError::MissingUsername),
    }
}
