use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{AppError, Result};

// =============================================================================
// Password Hashing (Argon2)
// =============================================================================

/// Hash a password with Argon2 and a random salt
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Returns
/// * The hash in PHC string format (embeds algorithm, parameters and salt),
///   ready to store in the admin table
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash
///
/// Returns `false` for a wrong password and for an unparseable hash; a
/// malformed stored hash must fail login, not crash it.
///
/// # Security Note
/// Argon2's verifier compares in constant time, so this does not leak
/// how close the guess was.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
