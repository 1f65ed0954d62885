//! Preflight and fallback handlers

use axum::http::StatusCode;

use crate::response::ApiError;

/// OPTIONS on a resource: empty 200
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method a resource does not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
