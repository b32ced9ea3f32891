use crate::shared::{
    auth::create_token,
    usecase::{execute, UseCase},
};
use crate::error::ConciergeError;
use actix_web::{web, HttpResponse};
use concierge_api_structs::register::*;
use concierge_domain::{Role, User, ID};
use concierge_infra::{ConciergeContext, RepoError};
use concierge_utils::hash_password;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

pub async fn register_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let body = body.0;
    let usecase = RegisterUseCase {
        username: body.username,
        password: body.password,
        full_name: body.full_name,
        role: body.role.unwrap_or_default(),
        room_id: body.room_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.token, res.user)))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct RegisterUseCase {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub room_id: Option<ID>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub token: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidData(String),
    UsernameTaken(String),
    StorageError(String),
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::UsernameTaken(username) => Self::Conflict(format!(
                "The username {} is already taken. Usernames need to be unique.",
                username
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

impl RegisterUseCase {
    fn validate(&self) -> Result<(), UseCaseError> {
        if self.username.trim().chars().count() < MIN_USERNAME_LEN {
            return Err(UseCaseError::InvalidData(format!(
                "Username must be at least {} characters long",
                MIN_USERNAME_LEN
            )));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UseCaseError::InvalidData(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }
        if self.full_name.trim().is_empty() {
            return Err(UseCaseError::InvalidData("Full name must not be empty".into()));
        }
        if self.role == Role::Admin {
            return Err(UseCaseError::InvalidData(
                "Admin accounts cannot be self registered".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "Register";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        self.validate()?;
        let username = self.username.trim().to_string();

        let mut user = User::new(
            username.clone(),
            self.full_name.trim().to_string(),
            self.role,
            hash_password(&self.password),
        );
        user.room_id = self.room_id;

        let user = match ctx.repos.users.insert(&user).await {
            Ok(user) => user,
            Err(RepoError::Constraint(_)) => return Err(UseCaseError::UsernameTaken(username)),
            Err(e) => return Err(UseCaseError::StorageError(e.to_string())),
        };

        let token = create_token(&user, &ctx.config.jwt_secret, ctx.sys.now())
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(UseCaseRes { user, token })
    }
}
