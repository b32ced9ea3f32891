use chrono::{DateTime, Utc};
use concierge_domain::{Role, User, ID};
use serde::{Deserialize, Serialize};

/// A `User` as shown to clients, without the password hash
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub room_id: Option<ID>,
    pub created_at: DateTime<Utc>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            room_id: user.room_id,
            created_at: user.created_at,
        }
    }
}
