use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Resource, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    Guest,
    Staff,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub user_id: Option<ID>,
    pub room_id: Option<ID>,
    pub sender: ChatSender,
    pub content: String,
}

impl Resource for ChatMessage {
    const NAME: &'static str = "chat message";
    const TABLE: &'static str = "chat_messages";
    const COLUMNS: &'static [&'static str] = &["user_id", "room_id", "sender", "content"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("content", &self.content)
    }
}
