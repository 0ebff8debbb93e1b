//! Password digest used for credential equality checks.
//!
//! This is deliberately a single unsalted SHA-256: it is what the sheet
//! stores and what signin compares against, and it is *not* a hardened
//! credential store (no per-user salt, no slow hash). Equality checking is
//! the only supported use.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of `input` (64 characters).
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}
