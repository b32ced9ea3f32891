use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Resource, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_number: String,
    pub room_type_id: ID,
    pub floor: Option<i32>,
    #[serde(default)]
    pub status: RoomStatus,
}

impl Resource for Room {
    const NAME: &'static str = "room";
    const TABLE: &'static str = "rooms";
    const COLUMNS: &'static [&'static str] = &["room_number", "room_type_id", "floor", "status"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("room_number", &self.room_number)
    }
}
