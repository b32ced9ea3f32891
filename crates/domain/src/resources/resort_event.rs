use crate::{
    shared::validation::{require_at_least, require_non_empty, ValidationError},
    Resource, ID,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResortEvent {
    pub title: String,
    pub description: Option<String>,
    pub location_id: Option<ID>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

impl Resource for ResortEvent {
    const NAME: &'static str = "resort event";
    const TABLE: &'static str = "resort_events";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "location_id",
        "starts_at",
        "ends_at",
        "capacity",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        if let Some(ends_at) = self.ends_at {
            if ends_at < self.starts_at {
                return Err(ValidationError::new("ends_at", "must not be before starts_at"));
            }
        }
        if let Some(capacity) = self.capacity {
            require_at_least("capacity", capacity, 1)?;
        }
        Ok(())
    }
}
