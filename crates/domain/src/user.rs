use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Guest,
    Staff,
    Driver,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Staff => "staff",
            Self::Driver => "driver",
            Self::Admin => "admin",
        }
    }

    /// Staff and admins operate the hotel back office
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown role: {0}")]
pub struct InvalidRoleError(String);

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Self::Guest),
            "staff" => Ok(Self::Staff),
            "driver" => Ok(Self::Driver),
            "admin" => Ok(Self::Admin),
            _ => Err(InvalidRoleError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub room_id: Option<ID>,
    /// Salted hash, see `concierge_utils::hash_password`
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// A user which has not been stored yet. The store assigns the id.
    pub fn new(username: String, full_name: String, role: Role, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: ID::default(),
            username,
            full_name,
            role,
            room_id: None,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    fn id(&self) -> ID {
        self.id
    }
}
