use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid `{field}`: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new<T: Into<String>>(field: &'static str, reason: T) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn require_in_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}

pub fn require_at_least<T>(field: &'static str, value: T, min: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {}, got {}", min, value),
        ));
    }
    Ok(())
}
