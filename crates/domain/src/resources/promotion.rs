use crate::{
    shared::validation::{require_in_range, require_non_empty, ValidationError},
    Resource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub title: String,
    pub description: Option<String>,
    pub discount_percent: Option<f64>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Promotion {
    const NAME: &'static str = "promotion";
    const TABLE: &'static str = "promotions";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "discount_percent",
        "valid_from",
        "valid_until",
        "is_active",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("title", &self.title)?;
        if let Some(discount) = self.discount_percent {
            require_in_range("discount_percent", discount, 0.0, 100.0)?;
        }
        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            if from > until {
                return Err(ValidationError::new(
                    "valid_until",
                    "must not be before valid_from",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn spa_week(now: DateTime<Utc>) -> Promotion {
        Promotion {
            title: "Spa week".into(),
            description: None,
            discount_percent: Some(20.0),
            valid_from: Some(now - Duration::days(1)),
            valid_until: Some(now + Duration::days(6)),
            is_active: true,
        }
    }

    #[test]
    fn validates_period_and_discount() {
        let now = Utc::now();
        assert!(spa_week(now).validate().is_ok());

        let mut promotion = spa_week(now);
        promotion.valid_until = Some(now - Duration::days(2));
        assert!(promotion.validate().is_err());

        let mut promotion = spa_week(now);
        promotion.discount_percent = Some(120.0);
        assert!(promotion.validate().is_err());
    }
}
