//! Address domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shipping address referenced by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub mobile: String,
}
