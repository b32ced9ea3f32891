mod get_me;
mod login;
mod register;

use actix_web::web;
use get_me::get_me_controller;
use login::login_controller;
use register::register_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register_controller));
    cfg.route("/auth/login", web::post().to(login_controller));
    cfg.route("/auth/me", web::get().to(get_me_controller));
}
