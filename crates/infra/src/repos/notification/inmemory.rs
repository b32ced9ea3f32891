use super::INotificationRepo;
use crate::repos::{
    resource::InMemoryResourceRepo,
    shared::{inmemory_repo::*, repo_error::RepoError},
};
use chrono::Utc;
use concierge_domain::{Notification, Record, ID};
use std::cmp::Reverse;

#[async_trait::async_trait]
impl INotificationRepo for InMemoryResourceRepo<Notification> {
    async fn find_by_user(
        &self,
        user_id: ID,
        unread_only: bool,
    ) -> Result<Vec<Record<Notification>>, RepoError> {
        let mut inbox = find_by(&self.records, |n| {
            n.fields.is_addressed_to(user_id) && !(unread_only && n.fields.is_read)
        });
        inbox.sort_by_key(|n| Reverse((n.created_at, n.id)));
        Ok(inbox)
    }

    async fn mark_read(
        &self,
        notification_id: ID,
    ) -> Result<Option<Record<Notification>>, RepoError> {
        Ok(update_one(notification_id, &self.records, |n| {
            n.fields.is_read = true;
            n.updated_at = Utc::now();
        }))
    }
}
