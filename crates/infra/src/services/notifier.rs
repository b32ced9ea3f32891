use crate::repos::IResourceRepo;
use concierge_domain::{Notification, Record};
use std::sync::Arc;
use tracing::info;

/// Delivers notifications to guests
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<Record<Notification>>;
}

/// Delivers by storing the notification, guests pick it up from their inbox
pub struct StoreNotifier {
    notifications: Arc<dyn IResourceRepo<Notification>>,
}

impl StoreNotifier {
    pub fn new(notifications: Arc<dyn IResourceRepo<Notification>>) -> Self {
        Self { notifications }
    }
}

#[async_trait::async_trait]
impl INotifier for StoreNotifier {
    async fn notify(&self, notification: &Notification) -> anyhow::Result<Record<Notification>> {
        let record = self.notifications.insert(notification).await?;
        info!(
            notification_id = %record.id,
            reservation_id = ?notification.reservation_id,
            "Stored notification"
        );
        Ok(record)
    }
}
