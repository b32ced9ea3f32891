use crate::{APIResponse, BaseClient};
use concierge_api_structs::*;
use concierge_domain::{Role, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthClient {
    base: Arc<BaseClient>,
}

pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Option<Role>,
    pub room_id: Option<ID>,
}

impl AuthClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(&self, input: RegisterInput) -> APIResponse<register::APIResponse> {
        let body = register::RequestBody {
            username: input.username,
            password: input.password,
            full_name: input.full_name,
            role: input.role,
            room_id: input.room_id,
        };
        self.base
            .post(body, "api/v1/auth/register".into(), StatusCode::CREATED)
            .await
    }

    pub async fn login(&self, username: String, password: String) -> APIResponse<login::APIResponse> {
        let body = login::RequestBody { username, password };
        self.base
            .post(body, "api/v1/auth/login".into(), StatusCode::OK)
            .await
    }

    /// Requires the SDK to be created with a token
    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("api/v1/auth/me".into(), StatusCode::OK).await
    }
}
