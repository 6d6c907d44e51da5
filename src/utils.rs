// src/utils.rs
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `content`.
#[must_use]
pub fn compute_sha256(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
