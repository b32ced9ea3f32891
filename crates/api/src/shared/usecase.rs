use concierge_infra::ConciergeContext;
use std::fmt::Debug;
use tracing::error;

#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error: Debug;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &ConciergeContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = %U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &ConciergeContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
