mod notification;
mod reservation;
mod resource;
mod shared;
mod user;

use concierge_domain::{
    ChatMessage, HotelReview, KnowledgeItem, Location, MenuItem, Notification, Promotion,
    Reservation, ResortEvent, RideRequest, Room, RoomType, ServiceRequest,
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

pub use notification::INotificationRepo;
pub use reservation::IReservationRepo;
pub use resource::{IResourceRepo, InMemoryResourceRepo, PostgresResourceRepo};
pub use shared::{query_structs::*, repo_error::RepoError};
pub use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub locations: Arc<dyn IResourceRepo<Location>>,
    pub room_types: Arc<dyn IResourceRepo<RoomType>>,
    pub rooms: Arc<dyn IResourceRepo<Room>>,
    pub menu_items: Arc<dyn IResourceRepo<MenuItem>>,
    pub promotions: Arc<dyn IResourceRepo<Promotion>>,
    pub knowledge_items: Arc<dyn IResourceRepo<KnowledgeItem>>,
    pub resort_events: Arc<dyn IResourceRepo<ResortEvent>>,
    pub ride_requests: Arc<dyn IResourceRepo<RideRequest>>,
    pub service_requests: Arc<dyn IResourceRepo<ServiceRequest>>,
    pub chat_messages: Arc<dyn IResourceRepo<ChatMessage>>,
    pub notifications: Arc<dyn IResourceRepo<Notification>>,
    pub hotel_reviews: Arc<dyn IResourceRepo<HotelReview>>,
    pub reservations: Arc<dyn IResourceRepo<Reservation>>,
    /// Same store as `reservations`
    pub checkouts: Arc<dyn IReservationRepo>,
    /// Same store as `notifications`
    pub notification_inbox: Arc<dyn INotificationRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        info!("Using postgres repositories");
        let reservations = Arc::new(PostgresResourceRepo::<Reservation>::new(pool.clone()));
        let notifications = Arc::new(PostgresResourceRepo::<Notification>::new(pool.clone()));
        Self {
            locations: Arc::new(PostgresResourceRepo::<Location>::new(pool.clone())),
            room_types: Arc::new(PostgresResourceRepo::<RoomType>::new(pool.clone())),
            rooms: Arc::new(PostgresResourceRepo::<Room>::new(pool.clone())),
            menu_items: Arc::new(PostgresResourceRepo::<MenuItem>::new(pool.clone())),
            promotions: Arc::new(PostgresResourceRepo::<Promotion>::new(pool.clone())),
            knowledge_items: Arc::new(PostgresResourceRepo::<KnowledgeItem>::new(pool.clone())),
            resort_events: Arc::new(PostgresResourceRepo::<ResortEvent>::new(pool.clone())),
            ride_requests: Arc::new(PostgresResourceRepo::<RideRequest>::new(pool.clone())),
            service_requests: Arc::new(PostgresResourceRepo::<ServiceRequest>::new(pool.clone())),
            chat_messages: Arc::new(PostgresResourceRepo::<ChatMessage>::new(pool.clone())),
            hotel_reviews: Arc::new(PostgresResourceRepo::<HotelReview>::new(pool.clone())),
            notifications: notifications.clone(),
            notification_inbox: notifications,
            reservations: reservations.clone(),
            checkouts: reservations,
            users: Arc::new(PostgresUserRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        let reservations = Arc::new(InMemoryResourceRepo::<Reservation>::new());
        let notifications = Arc::new(InMemoryResourceRepo::<Notification>::new());
        Self {
            locations: Arc::new(InMemoryResourceRepo::<Location>::new()),
            room_types: Arc::new(InMemoryResourceRepo::<RoomType>::new()),
            rooms: Arc::new(InMemoryResourceRepo::<Room>::new()),
            menu_items: Arc::new(InMemoryResourceRepo::<MenuItem>::new()),
            promotions: Arc::new(InMemoryResourceRepo::<Promotion>::new()),
            knowledge_items: Arc::new(InMemoryResourceRepo::<KnowledgeItem>::new()),
            resort_events: Arc::new(InMemoryResourceRepo::<ResortEvent>::new()),
            ride_requests: Arc::new(InMemoryResourceRepo::<RideRequest>::new()),
            service_requests: Arc::new(InMemoryResourceRepo::<ServiceRequest>::new()),
            chat_messages: Arc::new(InMemoryResourceRepo::<ChatMessage>::new()),
            hotel_reviews: Arc::new(InMemoryResourceRepo::<HotelReview>::new()),
            notifications: notifications.clone(),
            notification_inbox: notifications,
            reservations: reservations.clone(),
            checkouts: reservations,
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}

/// Looks up the repository of a resource type, so handlers can be written
/// once for every resource.
pub trait ResourceStore: concierge_domain::Resource {
    fn store(repos: &Repos) -> &Arc<dyn IResourceRepo<Self>>;
}

macro_rules! resource_store {
    ($($resource:ty => $field:ident),+ $(,)?) => {
        $(
            impl ResourceStore for $resource {
                fn store(repos: &Repos) -> &Arc<dyn IResourceRepo<Self>> {
                    &repos.$field
                }
            }
        )+
    };
}

resource_store! {
    Location => locations,
    RoomType => room_types,
    Room => rooms,
    MenuItem => menu_items,
    Promotion => promotions,
    KnowledgeItem => knowledge_items,
    ResortEvent => resort_events,
    RideRequest => ride_requests,
    ServiceRequest => service_requests,
    ChatMessage => chat_messages,
    Notification => notifications,
    HotelReview => hotel_reviews,
    Reservation => reservations,
}
