use super::UseCaseError;
use crate::error::ConciergeError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use concierge_api_structs::list_resources::QueryParams;
use concierge_domain::Record;
use concierge_infra::{ConciergeContext, ListQuery, ResourceStore};
use std::marker::PhantomData;

pub async fn list_resources_controller<R: ResourceStore>(
    query: web::Query<QueryParams>,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let query = query.0;
    let usecase = ListResourcesUseCase::<R>::new(ListQuery::new(query.skip, query.limit));

    execute(usecase, &ctx)
        .await
        .map(|records| HttpResponse::Ok().json(records))
        .map_err(ConciergeError::from)
}

#[derive(Debug)]
pub struct ListResourcesUseCase<R> {
    pub query: ListQuery,
    _resource: PhantomData<R>,
}

impl<R> ListResourcesUseCase<R> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            _resource: PhantomData,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<R: ResourceStore> UseCase for ListResourcesUseCase<R> {
    type Response = Vec<Record<R>>;
    type Error = UseCaseError;

    const NAME: &'static str = "ListResources";

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error> {
        Ok(R::store(&ctx.repos).find_many(self.query).await?)
    }
}
