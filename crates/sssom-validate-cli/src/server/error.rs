//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sssom_validate::ValidateError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Internal server error. The message is shown to the user as is.
    Internal(String),
    /// Error from the validation library.
    Validate(ValidateError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    /// HTTP status and machine-readable error code.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            ApiError::Validate(e) if e.is_fetch() => (StatusCode::BAD_GATEWAY, "fetch_failed"),
            ApiError::Validate(ValidateError::NoInput) => (StatusCode::BAD_REQUEST, "no_input"),
            ApiError::Validate(ValidateError::Render(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "render_failed")
            }
            ApiError::Validate(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
        }
    }

    /// Message safe to show to the user.
    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => {
                msg.clone()
            }
            ApiError::Validate(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status();

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message: self.message(),
            }),
        )
            .into_response()
    }
}

impl From<ValidateError> for ApiError {
    fn from(err: ValidateError) -> Self {
        ApiError::Validate(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Validate(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from(ValidateError::NoInput).status().0, StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(ValidateError::HttpStatus {
                url: "https://example.org/m.tsv".into(),
                status: 404,
            })
            .status(),
            (StatusCode::BAD_GATEWAY, "fetch_failed")
        );
        assert_eq!(
            ApiError::from(ValidateError::Render("bad template".into())).status().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
