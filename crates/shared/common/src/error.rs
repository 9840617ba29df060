//! Unified error handling for the user services.
//!
//! Every failure is surfaced to the immediate caller unchanged; the layer
//! above decides how to present it.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// A user with this email already exists
    #[error("User already exists with email: {0}")]
    DuplicateUser(String),

    /// The looked-up record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token missing, malformed, expired or badly signed
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Caller-supplied value rejected
    #[error("Validation error: {0}")]
    Validation(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Persistence error: {0}")]
    Persistence(#[from] sea_orm::DbErr),

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateUser(_) => "DUPLICATE_USER",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidToken(_) => "INVALID_TOKEN",
            AppError::Validation(_) => "VALIDATION_ERROR",
            #[cfg(feature = "database")]
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Token Error Conversion
// =============================================================================

#[cfg(feature = "jwt")]
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::InvalidToken(err.to_string())
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Internal(msg),
            DomainError::UnknownRole(role) => {
                AppError::Validation(format!("unknown role '{}'", role))
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, what: impl FnOnce() -> String) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(what()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn duplicate_user(email: impl Into<String>) -> Self {
        AppError::DuplicateUser(email.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        AppError::InvalidToken(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
