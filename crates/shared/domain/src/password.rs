//! Password value object - domain-level password handling.
//!
//! All hashing goes through bcrypt at [`PASSWORD_HASH_COST`], so stored
//! digests stay verifiable by any standard bcrypt implementation.

use crate::constants::PASSWORD_HASH_COST;
use crate::error::{DomainError, DomainResult};

/// Password value object holding a one-way bcrypt digest.
///
/// The plaintext never lives inside this type; only the salted hash does.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text with a fresh salt.
    ///
    /// # Errors
    /// Returns [`DomainError::Password`] if bcrypt rejects the input.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        Self::with_cost(plain_text, PASSWORD_HASH_COST)
    }

    /// Hash with an explicit bcrypt work factor.
    pub fn with_cost(plain_text: &str, cost: u32) -> DomainResult<Self> {
        let hash = bcrypt::hash(plain_text, cost)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash verifies as `false`.
    pub fn verify(&self, plain_text: &str) -> bool {
        bcrypt::verify(plain_text, &self.hash).unwrap_or(false)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "secret1";
        let password = Password::new(plain).unwrap();

        assert_ne!(password.as_str(), plain);
        assert!(password.verify(plain));
        assert!(!password.verify("secret2"));
    }

    #[test]
    fn test_hash_uses_fixed_cost() {
        let password = Password::new("secret1").unwrap();

        // bcrypt digests look like $2b$08$<salt+hash>
        assert!(password.as_str().starts_with("$2b$08$"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = Password::new(plain).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-bcrypt-hash");
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret1").unwrap();
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(password.as_str()));
    }
}
