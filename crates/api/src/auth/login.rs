use crate::shared::{
    auth::create_token,
    usecase::{execute, UseCase},
};
use crate::error::ConciergeError;
use actix_web::{web, HttpResponse};
use concierge_api_structs::login::*;
use concierge_domain::User;
use concierge_infra::ConciergeContext;
use concierge_utils::verify_password;

pub async fn login_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let body = body.0;
    let usecase = LoginUseCase {
        username: body.username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.token, res.user)))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct LoginUseCase {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
    pub token: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidCredentials,
    StorageError(String),
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid username or password".into())
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "Login";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        let user = ctx
            .repos
            .users
            .find_by_username(self.username.trim())
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?
            .ok_or(UseCaseError::InvalidCredentials)?;

        if !verify_password(&self.password, &user.password_hash) {
            return Err(UseCaseError::InvalidCredentials);
        }

        let token = create_token(&user, &ctx.config.jwt_secret, ctx.sys.now())
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(UseCaseRes { user, token })
    }
}
