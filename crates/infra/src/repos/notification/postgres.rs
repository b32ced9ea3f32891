use super::INotificationRepo;
use crate::repos::{
    resource::{into_records, PostgresResourceRepo, RecordRaw},
    shared::repo_error::RepoError,
};
use concierge_domain::{Notification, Record, ID};

#[async_trait::async_trait]
impl INotificationRepo for PostgresResourceRepo<Notification> {
    async fn find_by_user(
        &self,
        user_id: ID,
        unread_only: bool,
    ) -> Result<Vec<Record<Notification>>, RepoError> {
        let rows: Vec<RecordRaw> = sqlx::query_as(
            r#"
            SELECT row_to_json(n) AS data FROM notifications AS n
            WHERE n.user_id = $1
            AND (NOT $2 OR n.is_read = false)
            ORDER BY n.created_at DESC, n.id DESC
            "#,
        )
        .bind(user_id.inner())
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;
        into_records(rows)
    }

    async fn mark_read(
        &self,
        notification_id: ID,
    ) -> Result<Option<Record<Notification>>, RepoError> {
        let row: Option<RecordRaw> = sqlx::query_as(
            r#"
            UPDATE notifications AS n
            SET is_read = true, updated_at = now()
            WHERE n.id = $1
            RETURNING row_to_json(n) AS data
            "#,
        )
        .bind(notification_id.inner())
        .fetch_optional(&self.pool)
        .await?;
        row.map(RecordRaw::into_record::<Notification>).transpose()
    }
}
