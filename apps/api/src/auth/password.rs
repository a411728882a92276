use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::AppError;

/// Hashes a plaintext password with bcrypt at the default cost.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    hash(plain, DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Constant-time verification; malformed stored hashes count as a mismatch.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hashed = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hashed));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hashed = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hashed));
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-hash"));
    }
}
