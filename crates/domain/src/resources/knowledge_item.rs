use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Resource,
};
use serde::{Deserialize, Serialize};

/// An entry in the concierge knowledge base, e.g. "When is breakfast served?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Resource for KnowledgeItem {
    const NAME: &'static str = "knowledge item";
    const TABLE: &'static str = "knowledge_items";
    const COLUMNS: &'static [&'static str] = &["title", "content", "category", "tags"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("content", &self.content)
    }
}
