//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings, which embed
//! the salt and parameters alongside the digest. Verification treats every
//! failure mode (unknown hash format, parameter mismatch, wrong password)
//! as a mismatch so login cannot leak which stage failed.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use thiserror::Error;

/// Hashing failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to hash password: {0}")]
pub struct PasswordHashError(String);

/// Hashes a plain-text password into an Argon2id PHC string.
///
/// # Errors
///
/// Returns [`PasswordHashError`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| PasswordHashError(error.to_string()))
}

/// Checks a plain-text password against a stored PHC string.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}
