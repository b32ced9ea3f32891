mod inmemory;
mod postgres;

use crate::repos::shared::repo_error::RepoError;
use concierge_domain::{Notification, Record, ID};

/// Inbox queries on top of the generic notification store
#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    /// Notifications addressed to the user, newest first
    async fn find_by_user(
        &self,
        user_id: ID,
        unread_only: bool,
    ) -> Result<Vec<Record<Notification>>, RepoError>;
    /// `None` if the notification does not exist
    async fn mark_read(&self, notification_id: ID)
        -> Result<Option<Record<Notification>>, RepoError>;
}
