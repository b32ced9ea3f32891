use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_api_structs::get_user_notifications::*;
use concierge_domain::{Notification, Record, ID};
use concierge_infra::ConciergeContext;

pub async fn get_user_notifications_controller(
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let usecase = GetUserNotificationsUseCase {
        user_id: path.user_id,
        unread_only: query.unread.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|notifications| HttpResponse::Ok().json(notifications))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct GetUserNotificationsUseCase {
    pub user_id: ID,
    pub unread_only: bool,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserNotificationsUseCase {
    type Response = Vec<Record<Notification>>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetUserNotifications";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .notification_inbox
            .find_by_user(self.user_id, self.unread_only)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
