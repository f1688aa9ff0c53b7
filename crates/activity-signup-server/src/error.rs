//! Error types for the signup server.

use activity_registry::RegistryError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Registry failure reported with its natural status (signup).
    #[error(transparent)]
    Registry(RegistryError),

    /// Registry failure reported as a rejected request regardless of kind (removal).
    #[error(transparent)]
    Rejected(RegistryError),

    /// Path or query string that could not be decoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Registry(e) => match e {
                RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                RegistryError::AlreadyRegistered { .. } => {
                    (StatusCode::BAD_REQUEST, "ALREADY_REGISTERED")
                }
                RegistryError::Full(_) => (StatusCode::BAD_REQUEST, "ACTIVITY_FULL"),
                RegistryError::NotRegistered { .. } => (StatusCode::BAD_REQUEST, "NOT_REGISTERED"),
                RegistryError::InvalidSeed { .. }
                | RegistryError::SeedIo(_)
                | RegistryError::SeedFormat(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
            ApiError::Rejected(e) => {
                let code = match e {
                    RegistryError::NotFound(_) => "NOT_FOUND",
                    RegistryError::AlreadyRegistered { .. } => "ALREADY_REGISTERED",
                    RegistryError::Full(_) => "ACTIVITY_FULL",
                    RegistryError::NotRegistered { .. } => "NOT_REGISTERED",
                    _ => "REJECTED",
                };
                (StatusCode::BAD_REQUEST, code)
            }
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::MissingParameter(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_PARAMETER")
            }
            ApiError::RateLimitExceeded => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT_EXCEEDED"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            detail: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        ApiError::Registry(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_status_mapping() {
        let not_found = ApiError::from(RegistryError::NotFound("Chess Club".into()));
        assert_eq!(not_found.status_and_code().0, StatusCode::NOT_FOUND);

        let full = ApiError::from(RegistryError::Full("Chess Club".into()));
        assert_eq!(full.status_and_code(), (StatusCode::BAD_REQUEST, "ACTIVITY_FULL"));
        assert_eq!(full.to_string(), "Activity is full");
    }

    #[test]
    fn test_rejected_is_always_bad_request() {
        let err = ApiError::Rejected(RegistryError::NotFound("Chess Club".into()));
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "NOT_FOUND"));
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn test_missing_parameter_is_unprocessable() {
        let err = ApiError::MissingParameter("email");
        assert_eq!(err.status_and_code().0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Missing required parameter: email");
    }
}
