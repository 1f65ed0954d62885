//! Response types and error handling for API endpoints
//!
//! Every failure leaves the server as `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use confession_common::ErrorResponse;
use confession_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Client-facing text for every 5xx response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotFound => "ROUTE_NOT_FOUND",
        }
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    /// Message shown to the client; server faults never leak their cause
    fn client_message(&self) -> String {
        if self.status_code().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(code = self.error_code(), error = ?self, "Server error occurred");
        }

        (status, Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confession_core::DomainError;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            ApiError::invalid_query("page must be a positive integer").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ServiceError::RateLimited(ServiceError::REACTION_RATE_LIMITED))
                .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::from(ServiceError::from(DomainError::ConfessionNotFound("1".into())))
                .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors_hide_cause() {
        let err = ApiError::from(ServiceError::from(DomainError::DatabaseError(
            "connection refused".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal server error");

        let err = ApiError::from(ServiceError::internal("limiter poisoned"));
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn test_client_errors_keep_message() {
        assert_eq!(ApiError::MethodNotAllowed.client_message(), "Method not allowed");
        let err = ApiError::from(ServiceError::from(DomainError::MessageRequired));
        assert_eq!(err.client_message(), "Message is required");
    }
}
