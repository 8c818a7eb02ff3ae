//! # HTTP API Errors
//!
//! Error types for the product routes. Every error renders as a JSON
//! object with a single `error` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
///
/// The display text is exactly what clients see; the carried detail is
/// only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a base-10 integer
    #[error("Invalid product ID")]
    InvalidId(String),

    /// Request body is not a decodable product object
    #[error("Invalid request body")]
    InvalidBody(String),

    /// No product carries the id
    #[error("Product not found")]
    NotFound(i64),

    /// No route matches the request path
    #[error("Not found")]
    RouteNotFound(String),

    /// The path exists but does not accept the method
    #[error("Method not allowed")]
    MethodNotAllowed(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidId(raw) => tracing::warn!(raw = %raw, "rejected product id"),
            ApiError::InvalidBody(reason) => tracing::warn!(%reason, "rejected request body"),
            ApiError::NotFound(id) => tracing::warn!(id, "product not found"),
            ApiError::RouteNotFound(path) => tracing::warn!(%path, "no route"),
            ApiError::MethodNotAllowed(request) => tracing::warn!(%request, "method not allowed"),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
