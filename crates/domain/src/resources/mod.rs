mod chat_message;
mod hotel_review;
mod knowledge_item;
mod location;
mod menu_item;
mod notification;
mod promotion;
mod reservation;
mod resort_event;
mod ride_request;
mod room;
mod room_type;
mod service_request;

pub use chat_message::{ChatMessage, ChatSender};
pub use hotel_review::HotelReview;
pub use knowledge_item::KnowledgeItem;
pub use location::Location;
pub use menu_item::MenuItem;
pub use notification::Notification;
pub use promotion::Promotion;
pub use reservation::Reservation;
pub use resort_event::ResortEvent;
pub use ride_request::{RideRequest, RideStatus};
pub use room::{Room, RoomStatus};
pub use room_type::RoomType;
pub use service_request::{ServiceRequest, ServiceRequestStatus};
