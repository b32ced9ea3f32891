mod inmemory;
mod postgres;

use crate::repos::shared::repo_error::RepoError;
use chrono::{DateTime, Utc};
use concierge_domain::{Record, Reservation, ID};

/// Queries used by the checkout reminder sweep
#[async_trait::async_trait]
pub trait IReservationRepo: Send + Sync {
    /// Reservations with `from <= checkout_at <= until` which have not been reminded
    async fn find_due_for_reminder(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Record<Reservation>>, RepoError>;
    /// Sets `reminded` if it is not already set. Returns whether this call set it.
    async fn mark_reminded(&self, reservation_id: ID) -> Result<bool, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_contexts, repos::fixtures, ConciergeContext};
    use chrono::{Duration, TimeZone};

    fn stay(room_id: ID, checkout_at: DateTime<Utc>) -> Reservation {
        Reservation {
            room_id,
            user_id: None,
            guest_name: "Alan".into(),
            check_in_at: checkout_at - Duration::days(2),
            checkout_at,
            reminded: false,
        }
    }

    async fn book(ctx: &ConciergeContext, checkout_at: DateTime<Utc>) -> Record<Reservation> {
        let room_id = fixtures::room(ctx).await;
        ctx.repos
            .reservations
            .insert(&stay(room_id, checkout_at))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn finds_unreminded_reservations_inside_window() {
        for ctx in create_contexts().await {
            let now = Utc.with_ymd_and_hms(2031, 3, 14, 8, 0, 0).unwrap();
            let until = now + Duration::hours(1);

            let due = book(&ctx, now + Duration::minutes(20)).await;
            let edge = book(&ctx, until).await;
            let later = book(&ctx, now + Duration::hours(5)).await;
            let past = book(&ctx, now - Duration::hours(1)).await;
            let reminded = book(&ctx, now + Duration::minutes(30)).await;
            assert!(ctx.repos.checkouts.mark_reminded(reminded.id).await.unwrap());

            let found = ctx.repos.checkouts.find_due_for_reminder(now, until).await.unwrap();
            let ids: Vec<_> = found.iter().map(|r| r.id).collect();
            assert!(ids.contains(&due.id));
            assert!(ids.contains(&edge.id));
            assert!(!ids.contains(&later.id));
            assert!(!ids.contains(&past.id));
            assert!(!ids.contains(&reminded.id));
            assert!(found.iter().all(|r| !r.fields.reminded));
        }
    }

    #[tokio::test]
    async fn marks_reminded_once() {
        for ctx in create_contexts().await {
            let now = Utc.with_ymd_and_hms(2031, 3, 15, 8, 0, 0).unwrap();
            let record = book(&ctx, now + Duration::minutes(5)).await;

            assert!(ctx.repos.checkouts.mark_reminded(record.id).await.unwrap());
            assert!(!ctx.repos.checkouts.mark_reminded(record.id).await.unwrap());
            assert!(!ctx
                .repos
                .checkouts
                .mark_reminded(ID::new(i64::MAX))
                .await
                .unwrap());

            let stored = ctx.repos.reservations.find(record.id).await.unwrap().unwrap();
            assert!(stored.fields.reminded);
            let due = ctx
                .repos
                .checkouts
                .find_due_for_reminder(now, now + Duration::hours(1))
                .await
                .unwrap();
            assert!(due.iter().all(|r| r.id != record.id));
        }
    }

    #[tokio::test]
    async fn save_resolves_reminded_against_stored_row() {
        for ctx in create_contexts().await {
            let now = Utc.with_ymd_and_hms(2031, 3, 16, 8, 0, 0).unwrap();
            let record = book(&ctx, now + Duration::minutes(10)).await;
            assert!(ctx.repos.checkouts.mark_reminded(record.id).await.unwrap());

            // A payload read before the row was marked keeps the mark
            let mut renamed = record.fields.clone();
            renamed.guest_name = "Alan Turing".into();
            let saved = ctx
                .repos
                .reservations
                .save(record.id, &renamed)
                .await
                .unwrap()
                .unwrap();
            assert!(saved.fields.reminded);
            assert_eq!(saved.fields.guest_name, "Alan Turing");

            // A new checkout re-arms it, whatever the payload says
            let mut postponed = saved.fields.clone();
            postponed.checkout_at = now + Duration::minutes(40);
            postponed.reminded = true;
            let saved = ctx
                .repos
                .reservations
                .save(record.id, &postponed)
                .await
                .unwrap()
                .unwrap();
            assert!(!saved.fields.reminded);
            assert_eq!(saved.fields.checkout_at, postponed.checkout_at);
        }
    }
}
