use crate::{
    shared::validation::{require_in_range, require_non_empty, ValidationError},
    Resource,
};
use serde::{Deserialize, Serialize};

/// A place on the resort grounds, e.g. a restaurant, the spa or the pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
}

impl Resource for Location {
    const NAME: &'static str = "location";
    const TABLE: &'static str = "locations";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "category",
        "latitude",
        "longitude",
        "image_url",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("category", &self.category)?;
        if let Some(latitude) = self.latitude {
            require_in_range("latitude", latitude, -90.0, 90.0)?;
        }
        if let Some(longitude) = self.longitude {
            require_in_range("longitude", longitude, -180.0, 180.0)?;
        }
        Ok(())
    }
}
