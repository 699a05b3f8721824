//! Signup validation and credential handling.
//!
//! Passwords are hashed with Argon2id before they ever touch the session
//! store; the plaintext never outlives the request that carried it.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

use framefit_core::{Email, EmailError};

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Signup validation failures, each with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("failed to hash password")]
    PasswordHash,
}

/// Validate signup input and hash the password.
///
/// Returns the parsed email and the Argon2id hash string to store.
///
/// # Errors
///
/// Returns the first validation failure: bad email, short password, or
/// mismatched confirmation.
pub fn validate_signup(
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<(Email, String), SignupError> {
    let email = Email::parse(email)?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(SignupError::WeakPassword);
    }
    if password != password_confirm {
        return Err(SignupError::PasswordMismatch);
    }

    Ok((email, hash_password(password)?))
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, SignupError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| SignupError::PasswordHash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;

    #[test]
    fn test_valid_signup_yields_a_verifiable_hash() {
        let (email, hash) =
            validate_signup("ana@example.com", "secret", "secret").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"secret", &parsed)
                .is_ok()
        );
    }

    #[test]
    fn test_plaintext_is_never_the_stored_value() {
        let (_, hash) = validate_signup("ana@example.com", "secret", "secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_short_password_is_rejected() {
        assert_eq!(
            validate_signup("ana@example.com", "12345", "12345"),
            Err(SignupError::WeakPassword)
        );
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        assert_eq!(
            validate_signup("ana@example.com", "secret", "secre7"),
            Err(SignupError::PasswordMismatch)
        );
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        assert!(matches!(
            validate_signup("not-an-email", "secret", "secret"),
            Err(SignupError::InvalidEmail(_))
        ));
    }
}
