use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<T: Into<String>>(error: T) -> Self {
        Self {
            error: error.into(),
        }
    }
}
