use crate::{
    shared::validation::{require_non_empty, ValidationError},
    Notification, Resource, ID,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest's stay in a room.
///
/// `reminded` tracks whether the checkout reminder for the current
/// `checkout_at` has been dispatched. It is owned by the server: clients
/// cannot set it, and it re-arms whenever the checkout is rescheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub room_id: ID,
    pub user_id: Option<ID>,
    pub guest_name: String,
    pub check_in_at: DateTime<Utc>,
    pub checkout_at: DateTime<Utc>,
    #[serde(default)]
    pub reminded: bool,
}

impl Reservation {
    /// Whether a checkout reminder should be sent for this reservation when
    /// looking ahead from `from` until `until`
    pub fn is_due_for_reminder(&self, from: DateTime<Utc>, until: DateTime<Utc>) -> bool {
        !self.reminded && from <= self.checkout_at && self.checkout_at <= until
    }

    pub fn checkout_reminder(&self, reservation_id: ID) -> Notification {
        Notification {
            user_id: self.user_id,
            room_id: Some(self.room_id),
            reservation_id: Some(reservation_id),
            title: "Checkout reminder".into(),
            message: format!(
                "Hi {}, your checkout is scheduled for {}. Let the front desk know if you need a late checkout or help with your luggage.",
                self.guest_name.trim(),
                self.checkout_at.format("%H:%M UTC on %b %-d")
            ),
            is_read: false,
        }
    }
}

impl Resource for Reservation {
    const NAME: &'static str = "reservation";
    const TABLE: &'static str = "reservations";
    const COLUMNS: &'static [&'static str] = &[
        "room_id",
        "user_id",
        "guest_name",
        "check_in_at",
        "checkout_at",
        "reminded",
    ];
    const MERGED_COLUMNS: &'static [(&'static str, &'static str)] = &[(
        "reminded",
        "CASE WHEN t.checkout_at IS DISTINCT FROM n.checkout_at THEN false ELSE t.reminded END",
    )];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("guest_name", &self.guest_name)?;
        if self.checkout_at <= self.check_in_at {
            return Err(ValidationError::new(
                "checkout_at",
                "must be after check_in_at",
            ));
        }
        Ok(())
    }

    fn prepare_insert(&mut self) {
        self.reminded = false;
    }

    fn prepare_update(&mut self, current: &Self) {
        self.reminded = if self.checkout_at == current.checkout_at {
            current.reminded
        } else {
            false
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn stay(checkout_at: DateTime<Utc>) -> Reservation {
        Reservation {
            room_id: ID::new(204),
            user_id: Some(ID::new(9)),
            guest_name: "Ada Lovelace".into(),
            check_in_at: checkout_at - Duration::days(3),
            checkout_at,
            reminded: false,
        }
    }

    #[test]
    fn due_only_inside_window_and_unreminded() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        let until = now + Duration::minutes(60);

        assert!(stay(now + Duration::minutes(30)).is_due_for_reminder(now, until));
        assert!(stay(until).is_due_for_reminder(now, until));
        assert!(!stay(now + Duration::minutes(61)).is_due_for_reminder(now, until));
        assert!(!stay(now - Duration::minutes(1)).is_due_for_reminder(now, until));

        let mut reminded = stay(now + Duration::minutes(30));
        reminded.reminded = true;
        assert!(!reminded.is_due_for_reminder(now, until));
    }

    #[test]
    fn reminder_is_addressed_to_occupant_and_room() {
        let checkout = Utc.with_ymd_and_hms(2026, 10, 18, 11, 0, 0).unwrap();
        let notification = stay(checkout).checkout_reminder(ID::new(77));
        assert_eq!(notification.user_id, Some(ID::new(9)));
        assert_eq!(notification.room_id, Some(ID::new(204)));
        assert_eq!(notification.reservation_id, Some(ID::new(77)));
        assert!(notification.message.contains("Ada Lovelace"));
        assert!(notification.message.contains("11:00 UTC on Oct 18"));
        assert!(notification.validate().is_ok());
    }

    #[test]
    fn client_cannot_preset_reminded() {
        let mut reservation = stay(Utc::now());
        reservation.reminded = true;
        reservation.prepare_insert();
        assert!(!reservation.reminded);
    }

    #[test]
    fn rescheduling_checkout_rearms_reminder() {
        let checkout = Utc::now();
        let mut current = stay(checkout);
        current.reminded = true;

        let mut renamed = stay(checkout);
        renamed.guest_name = "Ada King".into();
        renamed.prepare_update(&current);
        assert!(renamed.reminded);

        let mut postponed = stay(checkout + Duration::days(1));
        postponed.reminded = true;
        postponed.prepare_update(&current);
        assert!(!postponed.reminded);
    }

    #[test]
    fn merged_columns_are_writable_columns() {
        for (column, _) in Reservation::MERGED_COLUMNS {
            assert!(Reservation::COLUMNS.contains(column));
        }
    }

    #[test]
    fn checkout_must_follow_check_in() {
        let mut reservation = stay(Utc::now());
        assert!(reservation.validate().is_ok());
        reservation.checkout_at = reservation.check_in_at;
        assert!(reservation.validate().is_err());
    }
}
