use crate::{
    shared::validation::{require_at_least, require_non_empty, ValidationError},
    Resource,
};
use serde::{Deserialize, Serialize};

fn available() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    #[serde(default = "available")]
    pub is_available: bool,
    pub image_url: Option<String>,
}

impl Resource for MenuItem {
    const NAME: &'static str = "menu item";
    const TABLE: &'static str = "menu_items";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "category",
        "price",
        "is_available",
        "image_url",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("category", &self.category)?;
        require_at_least("price", self.price, 0.0)
    }
}
