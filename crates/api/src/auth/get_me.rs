use crate::{error::ConciergeError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use concierge_api_structs::get_me::*;
use concierge_infra::ConciergeContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<ConciergeContext>,
) -> Result<HttpResponse, ConciergeError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
