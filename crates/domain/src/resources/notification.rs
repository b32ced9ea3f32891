use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Resource, ID,
};
use serde::{Deserialize, Serialize};

/// A message addressed to a guest (by user and / or room) which clients poll for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub user_id: Option<ID>,
    pub room_id: Option<ID>,
    /// Set when the notification was produced for a `Reservation`
    pub reservation_id: Option<ID>,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    pub fn is_addressed_to(&self, user_id: ID) -> bool {
        self.user_id == Some(user_id)
    }
}

impl Resource for Notification {
    const NAME: &'static str = "notification";
    const TABLE: &'static str = "notifications";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "room_id",
        "reservation_id",
        "title",
        "message",
        "is_read",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("message", &self.message)?;
        if self.user_id.is_none() && self.room_id.is_none() {
            return Err(ValidationError::new(
                "user_id",
                "a notification needs a user_id or a room_id to be delivered to",
            ));
        }
        Ok(())
    }
}
