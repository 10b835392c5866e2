//! Checksums for migrations
//!
//! A SHA-256 of each migration's SQL is stored when it is applied, so an
//! edited migration is detected instead of silently skipped.

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
