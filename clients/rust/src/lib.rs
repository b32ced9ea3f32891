mod auth;
mod base;
mod checkout;
mod notification;
mod resource;
mod status;

pub use auth::{AuthClient, RegisterInput};
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use checkout::CheckoutReminderClient;
pub use concierge_api_structs::dtos::UserDTO as User;
pub use concierge_api_structs::run_checkout_reminders::APIResponse as CheckoutRemindersReport;
pub use concierge_domain::{
    ChatMessage, ChatSender, HotelReview, KnowledgeItem, Location, MenuItem, Notification,
    Promotion, Record, Reservation, ResortEvent, RideRequest, RideStatus, Role, Room, RoomStatus,
    RoomType, ServiceRequest, ServiceRequestStatus, ID,
};
pub use notification::NotificationClient;
pub use reqwest::StatusCode;
pub use resource::ResourceClient;
pub use status::StatusClient;
use std::sync::Arc;

/// Concierge SDK
///
/// The SDK contains methods for interacting with the Concierge server
/// API.
#[derive(Clone)]
pub struct ConciergeSDK {
    pub status: StatusClient,
    pub auth: AuthClient,
    pub checkout_reminders: CheckoutReminderClient,
    pub inbox: NotificationClient,
    pub locations: ResourceClient<Location>,
    pub room_types: ResourceClient<RoomType>,
    pub rooms: ResourceClient<Room>,
    pub menu_items: ResourceClient<MenuItem>,
    pub promotions: ResourceClient<Promotion>,
    pub knowledge_items: ResourceClient<KnowledgeItem>,
    pub resort_events: ResourceClient<ResortEvent>,
    pub ride_requests: ResourceClient<RideRequest>,
    pub service_requests: ResourceClient<ServiceRequest>,
    pub chat_messages: ResourceClient<ChatMessage>,
    pub notifications: ResourceClient<Notification>,
    pub hotel_reviews: ResourceClient<HotelReview>,
    pub reservations: ResourceClient<Reservation>,
}

impl ConciergeSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self::from_base(BaseClient::new(address.into()))
    }

    /// Sends `token` as bearer token on every request
    pub fn with_token<T: Into<String>, S: Into<String>>(address: T, token: S) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_token(token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        Self {
            status: StatusClient::new(base.clone()),
            auth: AuthClient::new(base.clone()),
            checkout_reminders: CheckoutReminderClient::new(base.clone()),
            inbox: NotificationClient::new(base.clone()),
            locations: ResourceClient::new(base.clone(), "locations"),
            room_types: ResourceClient::new(base.clone(), "room-types"),
            rooms: ResourceClient::new(base.clone(), "rooms"),
            menu_items: ResourceClient::new(base.clone(), "menu-items"),
            promotions: ResourceClient::new(base.clone(), "promotions"),
            knowledge_items: ResourceClient::new(base.clone(), "knowledge-items"),
            resort_events: ResourceClient::new(base.clone(), "resort-events"),
            ride_requests: ResourceClient::new(base.clone(), "ride-requests"),
            service_requests: ResourceClient::new(base.clone(), "service-requests"),
            chat_messages: ResourceClient::new(base.clone(), "chat-messages"),
            notifications: ResourceClient::new(base.clone(), "notifications"),
            hotel_reviews: ResourceClient::new(base.clone(), "hotel-reviews"),
            reservations: ResourceClient::new(base, "reservations"),
        }
    }
}
