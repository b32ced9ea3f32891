use concierge_domain::{Notification, Record, ID};
use serde::{Deserialize, Serialize};

pub mod get_user_notifications {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        pub unread: Option<bool>,
    }

    pub type APIResponse = Vec<Record<Notification>>;
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub id: ID,
    }

    pub type APIResponse = Record<Notification>;
}
