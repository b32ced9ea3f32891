use crate::{
    shared::validation::{require_in_range, require_non_empty, ValidationError},
    Resource, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelReview {
    pub user_id: Option<ID>,
    pub guest_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

impl Resource for HotelReview {
    const NAME: &'static str = "hotel review";
    const TABLE: &'static str = "hotel_reviews";
    const COLUMNS: &'static [&'static str] = &["user_id", "guest_name", "rating", "comment"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("guest_name", &self.guest_name)?;
        require_in_range("rating", self.rating, 1, 5)
    }
}
