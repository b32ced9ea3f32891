mod create_resource;
mod delete_resource;
mod get_resource;
mod list_resources;
mod update_resource;

use crate::error::ConciergeError;
use actix_web::web;
use concierge_domain::{
    ChatMessage, HotelReview, KnowledgeItem, Location, MenuItem, Notification, Promotion,
    Reservation, ResortEvent, RideRequest, Room, RoomType, ServiceRequest, ValidationError, ID,
};
use concierge_infra::{RepoError, ResourceStore};
use create_resource::create_resource_controller;
use delete_resource::delete_resource_controller;
use get_resource::get_resource_controller;
use list_resources::list_resources_controller;
use update_resource::update_resource_controller;

/// Errors shared by the generic resource use cases
#[derive(Debug)]
pub enum UseCaseError {
    NotFound(&'static str, ID),
    InvalidData(String),
    StorageError(String),
}

impl From<RepoError> for UseCaseError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Constraint(msg) => Self::InvalidData(msg),
            RepoError::Storage(e) => Self::StorageError(e.to_string()),
        }
    }
}

impl From<ValidationError> for UseCaseError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidData(e.to_string())
    }
}

impl From<UseCaseError> for ConciergeError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(name, id) => {
                Self::NotFound(format!("The {} with id: {}, was not found.", name, id))
            }
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

/// Registers list, get, create, update and delete of `R` under `path`
pub fn configure_resource<R: ResourceStore>(cfg: &mut web::ServiceConfig, path: &str) {
    let by_id = format!("{}/{{id}}", path);

    cfg.route(path, web::get().to(list_resources_controller::<R>));
    cfg.route(path, web::post().to(create_resource_controller::<R>));
    cfg.route(&by_id, web::get().to(get_resource_controller::<R>));
    cfg.route(&by_id, web::put().to(update_resource_controller::<R>));
    cfg.route(&by_id, web::delete().to(delete_resource_controller::<R>));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_resource::<Location>(cfg, "/locations");
    configure_resource::<RoomType>(cfg, "/room-types");
    configure_resource::<Room>(cfg, "/rooms");
    configure_resource::<MenuItem>(cfg, "/menu-items");
    configure_resource::<Promotion>(cfg, "/promotions");
    configure_resource::<KnowledgeItem>(cfg, "/knowledge-items");
    configure_resource::<ResortEvent>(cfg, "/resort-events");
    configure_resource::<RideRequest>(cfg, "/ride-requests");
    configure_resource::<ServiceRequest>(cfg, "/service-requests");
    configure_resource::<ChatMessage>(cfg, "/chat-messages");
    configure_resource::<Notification>(cfg, "/notifications");
    configure_resource::<HotelReview>(cfg, "/hotel-reviews");
    configure_resource::<Reservation>(cfg, "/reservations");
}
