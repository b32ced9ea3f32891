mod auth;
mod checkout;
mod error;
mod job_schedulers;
mod middleware;
mod notification;
mod resource;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{
    dev::{Server, Service},
    error::{JsonPayloadError, PathError, QueryPayloadError},
    middleware as actix_middleware, web, App, HttpRequest, HttpResponse, HttpServer,
};
use concierge_api_structs::ErrorResponse;
use concierge_infra::{ConciergeContext, Config};
use futures::future::{ready, Either};
use middleware::RateLimiter;
use std::{net::TcpListener, sync::Arc};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use error::ConciergeError;
pub use job_schedulers::{run_sweep, CheckoutReminderScheduler, SweepGuard};

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    auth::configure_routes(cfg);
    checkout::configure_routes(cfg);
    notification::configure_routes(cfg);
    resource::configure_routes(cfg);
}

fn cors(config: &Config) -> Cors {
    if config.allowed_origins.is_empty() {
        return Cors::permissive();
    }
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ConciergeError::BadClientData(err.to_string()).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ConciergeError::BadClientData(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ConciergeError::BadClientData(err.to_string()).into()
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(format!(
        "Route {} {} not found",
        req.method(),
        req.path()
    )))
}

pub struct Application {
    server: Server,
    port: u16,
    scheduler: CheckoutReminderScheduler,
}

impl Application {
    pub async fn new(context: ConciergeContext) -> Result<Self, std::io::Error> {
        let scheduler = CheckoutReminderScheduler::new(context.clone());
        let (server, port) = Application::configure_server(context, scheduler.guard()).await?;

        Ok(Self {
            server,
            port,
            scheduler,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(
        context: ConciergeContext,
        guard: SweepGuard,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let rate_limiter = Arc::new(RateLimiter::new(&context.config.rate_limit));

        let server = HttpServer::new(move || {
            let ctx = context.clone();
            let rate_limiter = rate_limiter.clone();

            App::new()
                .wrap_fn(move |req, srv| match rate_limiter.check(&req) {
                    Ok(()) => Either::Left(srv.call(req)),
                    Err(e) => Either::Right(ready(Err(actix_web::Error::from(e)))),
                })
                .wrap(cors(&ctx.config))
                .wrap(actix_middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new(guard.clone()))
                .app_data(web::Data::new(ctx))
                .configure(status::configure_routes)
                .service(web::scope("/api/v1").configure(configure_server_api))
                .default_service(web::route().to(not_found))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    /// Serves requests until the server stops, with the checkout reminder
    /// scheduler running alongside
    pub async fn start(mut self) -> Result<(), std::io::Error> {
        self.scheduler.start();
        info!("Listening on port {}", self.port);
        let res = self.server.await;
        self.scheduler.stop().await;
        res
    }
}
