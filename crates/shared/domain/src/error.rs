//! Domain-level errors.
//!
//! These errors represent domain logic failures and are independent of
//! infrastructure concerns (database, tokens).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Password hashing or hash parsing failed
    #[error("Password error: {0}")]
    Password(String),

    /// A role string that is not one of the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
