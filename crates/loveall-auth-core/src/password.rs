//! Credential verification
//!
//! Wraps bcrypt so a stored hash can be checked against a presented
//! secret. The candidate secret is never logged.

use crate::AuthError;

/// Check a presented secret against a stored bcrypt hash.
///
/// Any mismatch or malformed hash yields `false`; this function never
/// errors. The caller maps `false` to an authentication failure.
pub fn verify_password(stored_hash: &str, candidate: &str) -> bool {
    bcrypt::verify(candidate, stored_hash).unwrap_or(false)
}

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        AuthError::Internal("password hashing failed".to_string())
    })
}
