//! Password hashing
//!
//! bcrypt at cost 10. The stored string carries its own
//! salt and cost, so `users.password_hash` is the only column needed.

use crate::{Error, Result};

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, HASH_COST).map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))
}

/// Check a password against its stored hash.
///
/// An unparseable stored hash is an error, not a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    bcrypt::verify(password, stored_hash).map_err(|e| Error::Internal(format!("stored password hash is invalid: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_password_verifies() {
        let stored = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &stored).unwrap());
        assert!(!verify_password("correct horsE", &stored).unwrap());
        assert!(!verify_password("", &stored).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let a = hash_password("hunter22").unwrap();
        let b = hash_password("hunter22").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$2b$"));
    }

    #[test]
    fn test_corrupt_stored_hash_is_an_error() {
        let err = verify_password("anything", "not-a-bcrypt-hash").unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }
}
