//! Client identity hashing
//!
//! Raw client addresses are never stored or compared; everything downstream
//! works on the SHA-256 hex digest produced here.

use sha2::{Digest, Sha256};

/// Identifier used when no client address can be resolved.
///
/// It is hashed like any other value, so all such clients share one bucket.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Lowercase hex SHA-256 digest of `identifier`
pub fn hash_identifier(identifier: &str) -> String {
    hex::encode(Sha256::digest(identifier.as_bytes()))
}

/// Leading characters of a hash, safe to put in logs
pub fn short_hash(hash: &str) -> &str {
    hash.get(..8).unwrap_or(hash)
}
