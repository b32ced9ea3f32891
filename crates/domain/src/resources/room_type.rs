use crate::{
    shared::validation::{require_at_least, require_non_empty, ValidationError},
    Resource,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub name: String,
    pub description: Option<String>,
    pub base_price: f64,
    pub max_occupancy: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl Resource for RoomType {
    const NAME: &'static str = "room type";
    const TABLE: &'static str = "room_types";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "base_price",
        "max_occupancy",
        "amenities",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_at_least("base_price", self.base_price, 0.0)?;
        require_at_least("max_occupancy", self.max_occupancy, 1)
    }
}
