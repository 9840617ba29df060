//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository and token abstractions (traits) so they
//! can be exercised with substitutable fakes.

mod logging;
mod user_service;

pub use logging::LoggedUserService;
pub use user_service::{UserManager, UserService};
