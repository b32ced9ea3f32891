mod get_user_notifications;
mod mark_notification_read;

use actix_web::web;
use get_user_notifications::get_user_notifications_controller;
use mark_notification_read::mark_notification_read_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/user/{user_id}",
        web::get().to(get_user_notifications_controller),
    );
    cfg.route(
        "/notifications/{id}/read",
        web::put().to(mark_notification_read_controller),
    );
}
