use super::IReservationRepo;
use crate::repos::{
    resource::InMemoryResourceRepo,
    shared::{inmemory_repo::*, repo_error::RepoError},
};
use chrono::{DateTime, Utc};
use concierge_domain::{Record, Reservation, ID};

#[async_trait::async_trait]
impl IReservationRepo for InMemoryResourceRepo<Reservation> {
    async fn find_due_for_reminder(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Record<Reservation>>, RepoError> {
        Ok(find_by(&self.records, |r| {
            r.fields.is_due_for_reminder(from, until)
        }))
    }

    async fn mark_reminded(&self, reservation_id: ID) -> Result<bool, RepoError> {
        let mut marked = false;
        update_one(reservation_id, &self.records, |r| {
            if !r.fields.reminded {
                r.fields.reminded = true;
                r.updated_at = Utc::now();
                marked = true;
            }
        });
        Ok(marked)
    }
}
