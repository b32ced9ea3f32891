use crate::dtos::UserDTO;
use concierge_domain::{Role, User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDTO,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDTO,
}

impl AuthResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user: UserDTO::new(user),
        }
    }
}

pub mod register {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
        pub full_name: String,
        #[serde(default)]
        pub role: Option<Role>,
        #[serde(default)]
        pub room_id: Option<ID>,
    }

    pub type APIResponse = AuthResponse;
}

pub mod login {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    pub type APIResponse = AuthResponse;
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}
