use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Resource, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceRequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Housekeeping, maintenance, room service and similar requests from a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub room_id: ID,
    pub user_id: Option<ID>,
    pub request_type: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: ServiceRequestStatus,
}

impl Resource for ServiceRequest {
    const NAME: &'static str = "service request";
    const TABLE: &'static str = "service_requests";
    const COLUMNS: &'static [&'static str] =
        &["room_id", "user_id", "request_type", "description", "status"];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("request_type", &self.request_type)
    }
}
