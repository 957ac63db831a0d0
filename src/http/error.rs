//! # API Errors
//!
//! The single terminal stage translating failure kinds into HTTP
//! responses. Every failing request ends here; no other module maps a
//! failure to a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure kinds surfaced by the API layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No record matches a well-formed identifier.
    #[error("person not found")]
    NotFound,

    /// The identifier cannot address a record.
    #[error("malformatted id")]
    InvalidId,

    /// A field constraint was violated at write time.
    #[error("{message}")]
    ValidationFailed {
        /// Name of the offending field.
        field: String,
        /// Message produced by the store's validator.
        message: String,
    },

    /// A required request field is absent from the body.
    #[error("{0} missing")]
    MissingField(&'static str),

    /// A replace requires both fields present and non-empty.
    #[error("name or number is missing")]
    MissingBody,

    /// Unclassified failure.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,

            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingBody => StatusCode::BAD_REQUEST,

            ApiError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId => ApiError::InvalidId,
            StoreError::ValidationFailed { field, message } => {
                ApiError::ValidationFailed { field, message }
            }
            StoreError::Unknown(message) => ApiError::Unknown(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let status = self.status_code();
        match self {
            // The single-resource miss answers with an empty body.
            ApiError::NotFound => status.into_response(),
            _ => (status, Json(ErrorBody::new(self.to_string()))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ValidationFailed {
                field: "number".to_string(),
                message: "test".to_string(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingField("name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::MissingBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unknown("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_map_onto_api_errors() {
        assert_eq!(ApiError::from(StoreError::InvalidId), ApiError::InvalidId);

        let mapped = ApiError::from(StoreError::ValidationFailed {
            field: "number".to_string(),
            message: "040 is not a valid phone number".to_string(),
        });
        assert_eq!(mapped.to_string(), "040 is not a valid phone number");
    }

    #[test]
    fn missing_field_messages_name_the_field() {
        assert_eq!(ApiError::MissingField("name").to_string(), "name missing");
        assert_eq!(
            ApiError::MissingField("number").to_string(),
            "number missing"
        );
    }

    #[test]
    fn not_found_responds_without_a_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
