//! Password hashing.
//!
//! bcrypt with a fixed work factor. The cost is deliberately above the
//! library default; changing it only affects newly stored hashes.

use bcrypt::{hash, verify};

use crate::error::AppError;

const HASH_COST: u32 = 14;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, HASH_COST)?)
}

/// Returns true iff `password` reproduces `hashed`. A malformed hash counts
/// as a failed verification, not an error.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "secret";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_verify_with_malformed_hash_returns_false() {
        assert!(!verify_password("secret", "not-a-bcrypt-hash"));
        assert!(!verify_password("secret", ""));
    }
}
