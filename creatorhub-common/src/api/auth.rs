//! Session token helpers
//!
//! Clients authenticate with `Authorization: Bearer <token>`. Only the
//! SHA-256 digest of a token is stored.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh random session token (32 hex characters)
pub fn generate_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Hash a session token for storage and lookup
///
/// # Examples
///
/// ```
/// use creatorhub_common::api::auth::hash_session_token;
///
/// let hash = hash_session_token("secret-token");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash_session_token("secret-token"));
/// ```
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extract the token from an `Authorization` header value
///
/// Returns `None` unless the value uses the `Bearer` scheme with a
/// non-empty token.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
