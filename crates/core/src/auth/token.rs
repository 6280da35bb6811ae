//! Opaque bearer tokens.
//!
//! A token is 32 random bytes, URL-safe base64 encoded. Only its SHA-256
//! digest is ever stored.

use sha2::{Digest, Sha256};

/// Generates a new random session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    base64_url::encode(&bytes)
}

/// Hex SHA-256 of a token, as stored in the sessions table.
#[must_use]
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
