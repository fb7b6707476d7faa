//! Password Verification
//! Mission: Check presented passwords against stored bcrypt hashes

use anyhow::{Context, Result};

/// Check a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on a clean mismatch; an `Err` means the stored hash
/// itself could not be processed (corrupt or non-bcrypt input).
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    bcrypt::verify(plain, hashed).context("Failed to verify password hash")
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt of "secret", cost 12
    const SECRET_HASH: &str = "$2b$12$EixZaYVK1fsbw1ZfbX3OXePaWxn96p36WQoeG6Lruj3vjPGga31lW";

    #[test]
    fn test_verify_known_hash() {
        assert!(verify_password("secret", SECRET_HASH).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        assert!(!verify_password("not-the-password", SECRET_HASH).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("secret", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_verify_accepts_freshly_minted_hash() {
        let hash = bcrypt::hash("hunter2", bcrypt::DEFAULT_COST).unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }
}
