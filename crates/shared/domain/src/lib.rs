//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod address;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use address::Address;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{CreateUser, User, UserProfile, UserRole};
