//! Domain-level constants.
//!
//! These constants define business rules shared by every crate.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_CUSTOMER: &str = "customer";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Passwords
// =============================================================================

/// bcrypt work factor used for every stored password hash.
///
/// Existing records were hashed at this cost; changing it only affects
/// newly created users.
pub const PASSWORD_HASH_COST: u32 = 8;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 48;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

