//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod user;

pub use address::{ActiveModel as AddressActiveModel, Entity as AddressEntity, Model as AddressModel};
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
