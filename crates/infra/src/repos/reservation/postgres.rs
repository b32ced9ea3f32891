use super::IReservationRepo;
use crate::repos::{
    resource::{into_records, PostgresResourceRepo, RecordRaw},
    shared::repo_error::RepoError,
};
use chrono::{DateTime, Utc};
use concierge_domain::{Record, Reservation, ID};

#[async_trait::async_trait]
impl IReservationRepo for PostgresResourceRepo<Reservation> {
    async fn find_due_for_reminder(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Record<Reservation>>, RepoError> {
        let rows: Vec<RecordRaw> = sqlx::query_as(
            r#"
            SELECT row_to_json(r) AS data FROM reservations AS r
            WHERE r.checkout_at BETWEEN $1 AND $2
            AND r.reminded = false
            ORDER BY r.checkout_at
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;
        into_records(rows)
    }

    async fn mark_reminded(&self, reservation_id: ID) -> Result<bool, RepoError> {
        let res = sqlx::query(
            r#"
            UPDATE reservations
            SET reminded = true, updated_at = now()
            WHERE id = $1 AND reminded = false
            "#,
        )
        .bind(reservation_id.inner())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() == 1)
    }
}
