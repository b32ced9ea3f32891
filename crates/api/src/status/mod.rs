use actix_web::{web, HttpResponse};
use concierge_api_structs::get_service_health::*;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        status: "ok".into(),
        message: "Concierge API is up and running".into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(status));
}
