//! Bearer token parsing and validation.
//!
//! The balance endpoint is gated by a single shared secret presented as
//! `Authorization: Bearer <token>`. Header parsing is strict: the value is
//! split on the first space and the scheme must equal `Bearer` exactly, so a
//! header that merely contains the substring somewhere is rejected.

use subtle::ConstantTimeEq;

use crate::error::AppError;

/// The only accepted authorization scheme.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the bearer token from an `Authorization` header value.
///
/// Splits on the first space and requires the scheme half to equal `Bearer`.
/// The token half may be empty; an empty token simply fails the comparison
/// downstream. Anything else (no space, wrong scheme) is a malformed header.
pub fn parse_bearer(header: &str) -> Result<&str, AppError> {
    let mut parts = header.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    match parts.next() {
        Some(token) if scheme == BEARER_SCHEME => Ok(token),
        _ => Err(AppError::MalformedAuthHeader),
    }
}

/// Constant-time comparison of a presented token against the configured secret.
///
/// When lengths differ, performs a dummy comparison so timing does not reveal
/// whether the length matched.
pub fn token_matches(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}
