mod send_checkout_reminders;

use actix_web::web;
use send_checkout_reminders::send_checkout_reminders_controller;

pub use send_checkout_reminders::{CheckoutRemindersReport, SendCheckoutRemindersUseCase};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/checkout-reminders/run",
        web::post().to(send_checkout_reminders_controller),
    );
}
