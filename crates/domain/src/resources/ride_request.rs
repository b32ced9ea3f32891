use crate::{
    shared::validation::{require_in_range, require_non_empty, ValidationError},
    Resource, ID,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    #[default]
    Pending,
    Accepted,
    EnRoute,
    Completed,
    Cancelled,
}

/// A guest asking a resort driver for a ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    pub user_id: Option<ID>,
    pub room_id: Option<ID>,
    pub guest_name: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub passengers: i32,
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: RideStatus,
    pub driver_id: Option<ID>,
}

impl Resource for RideRequest {
    const NAME: &'static str = "ride request";
    const TABLE: &'static str = "ride_requests";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "room_id",
        "guest_name",
        "pickup_location",
        "dropoff_location",
        "passengers",
        "scheduled_for",
        "status",
        "driver_id",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("guest_name", &self.guest_name)?;
        require_non_empty("pickup_location", &self.pickup_location)?;
        require_non_empty("dropoff_location", &self.dropoff_location)?;
        require_in_range("passengers", self.passengers, 1, 12)?;
        if self.status != RideStatus::Pending
            && self.status != RideStatus::Cancelled
            && self.driver_id.is_none()
        {
            return Err(ValidationError::new(
                "driver_id",
                "must be set once a driver has accepted the ride",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride() -> RideRequest {
        RideRequest {
            user_id: None,
            room_id: Some(ID::new(12)),
            guest_name: "Grace".into(),
            pickup_location: "Lobby".into(),
            dropoff_location: "Airport".into(),
            passengers: 2,
            scheduled_for: None,
            status: RideStatus::Pending,
            driver_id: None,
        }
    }

    #[test]
    fn validates_passenger_count() {
        assert!(ride().validate().is_ok());
        let mut request = ride();
        request.passengers = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn accepted_ride_needs_driver() {
        let mut request = ride();
        request.status = RideStatus::Accepted;
        assert!(request.validate().is_err());
        request.driver_id = Some(ID::new(4));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn status_uses_snake_case() {
        let json = serde_json::to_value(RideStatus::EnRoute).unwrap();
        assert_eq!(json, "en_route");
    }
}
