use super::UseCaseError;
use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_api_structs::ResourcePathParams;
use concierge_domain::{Record, ID};
use concierge_infra::{ConciergeContext, ResourceStore};

pub async fn update_resource_controller<R: ResourceStore>(
    path: web::Path<ResourcePathParams>,
    body: web::Json<R>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let usecase = UpdateResourceUseCase {
        id: path.id,
        fields: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(record))
        .map_err(ConciergeError::from)
}

/// Replaces every writable field of the row. The store merges fields the
/// resource derives from the stored row in the same write.
#[derive(Debug)]
pub struct UpdateResourceUseCase<R> {
    pub id: ID,
    pub fields: R,
}

#[async_trait::async_trait(?Send)]
impl<R: ResourceStore> UseCase for UpdateResourceUseCase<R> {
    type Response = Record<R>;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateResource";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        self.fields.validate()?;

        R::store(&ctx.repos)
            .save(self.id, &self.fields)
            .await?
            .ok_or(UseCaseError::NotFound(R::NAME, self.id))
    }
}
