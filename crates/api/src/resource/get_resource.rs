use super::UseCaseError;
use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_api_structs::ResourcePathParams;
use concierge_domain::{Record, ID};
use concierge_infra::{ConciergeContext, ResourceStore};
use std::marker::PhantomData;

pub async fn get_resource_controller<R: ResourceStore>(
    path: web::Path<ResourcePathParams>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let usecase = GetResourceUseCase::<R>::new(path.id);

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(record))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct GetResourceUseCase<R> {
    pub id: ID,
    _resource: PhantomData<R>,
}

impl<R> GetResourceUseCase<R> {
    pub fn new(id: ID) -> Self {
        Self {
            id,
            _resource: PhantomData,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<R: ResourceStore> UseCase for GetResourceUseCase<R> {
    type Response = Record<R>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetResource";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        R::store(&ctx.repos)
            .find(self.id)
            .await?
            .ok_or(UseCaseError::NotFound(R::NAME, self.id))
    }
}
