use super::UseCaseError;
use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_domain::Record;
use concierge_infra::{ConciergeContext, ResourceStore};

pub async fn create_resource_controller<R: ResourceStore>(
    body: web::Json<R>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let usecase = CreateResourceUseCase { fields: body.0 };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(record))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct CreateResourceUseCase<R> {
    pub fields: R,
}

#[async_trait::async_trait(?Send)]
impl<R: ResourceStore> UseCase for CreateResourceUseCase<R> {
    type Response = Record<R>;
    type Error = UseCaseError;

    const NAME: &'static str = "CreateResource";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        self.fields.validate()?;
        self.fields.prepare_insert();

        Ok(R::store(&ctx.repos).insert(&self.fields).await?)
    }
}
