//! Bearer token issuing and verification.

mod jwt;

pub use jwt::{Claims, JwtProvider, TokenProvider};

#[cfg(any(test, feature = "test-utils"))]
pub use jwt::MockTokenProvider;
