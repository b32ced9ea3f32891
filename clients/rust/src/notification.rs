use crate::{APIResponse, BaseClient};
use concierge_api_structs::*;
use concierge_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

/// Inbox endpoints of the notifications collection
#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn for_user(
        &self,
        user_id: ID,
        unread_only: bool,
    ) -> APIResponse<get_user_notifications::APIResponse> {
        self.base
            .get(
                format!(
                    "api/v1/notifications/user/{}?unread={}",
                    user_id, unread_only
                ),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_read(&self, id: ID) -> APIResponse<mark_notification_read::APIResponse> {
        self.base
            .put(
                (),
                format!("api/v1/notifications/{}/read", id),
                StatusCode::OK,
            )
            .await
    }
}
