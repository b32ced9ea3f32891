use actix_web::{http::StatusCode, HttpResponse};
use concierge_api_structs::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConciergeError {
    /// The message is passed on to the client as is
    #[error("{0}")]
    InternalError(String),
    #[error("Invalid data provided: {0}")]
    BadClientData(String),
    #[error("There was a conflict with the request: {0}")]
    Conflict(String),
    #[error("Unauthorized request: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Too many requests, please try again later")]
    TooManyRequests,
}

impl actix_web::error::ResponseError for ConciergeError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn renders_json_error_body() {
        let err = ConciergeError::NotFound("The room with id: 3 was not found".into());
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(res.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "Not found: The room with id: 3 was not found");
    }

    #[test]
    fn surfaces_internal_message() {
        let err = ConciergeError::InternalError("connection refused".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "connection refused");
    }
}
