//! Salted one-way password hashing.
//!
//! Stored form is `<salt_hex>$<digest_hex>` where the digest is
//! SHA-256 over `salt || password`. Verification recomputes the digest
//! with the stored salt; there is no way back to the password.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;
const SEPARATOR: char = '$';

/// Hash a password with a fresh random salt.
pub fn hash(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    format!(
        "{}{SEPARATOR}{}",
        hex::encode(salt),
        digest_hex(&salt, password)
    )
}

/// Verify a claimed password against a stored `salt$digest` credential.
///
/// A stored value that does not parse as `salt$digest` simply fails
/// verification; the caller reports it as an authentication failure,
/// not a storage one.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once(SEPARATOR) else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    digest_hex(&salt, password) == expected
}

fn digest_hex(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
