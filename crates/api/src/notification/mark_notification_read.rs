use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_api_structs::mark_notification_read::*;
use concierge_domain::{Notification, Record, ID};
use concierge_infra::ConciergeContext;

pub async fn mark_notification_read_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let usecase = MarkNotificationReadUseCase {
        notification_id: path.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Ok().json(notification))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
    pub notification_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(String),
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => Self::NotFound(format!(
                "The notification with id: {}, was not found.",
                id
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkNotificationReadUseCase {
    type Response = Record<Notification>;
    type Error = UseCaseError;

    const NAME: &'static str = "MarkNotificationRead";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.notification_inbox.mark_read(self.notification_id).await {
            Ok(Some(notification)) => Ok(notification),
            Ok(None) => Err(UseCaseError::NotFound(self.notification_id)),
            Err(e) => Err(UseCaseError::StorageError(e.to_string())),
        }
    }
}
