//! JSON fallbacks for unmatched paths and methods

use axum::http::{Method, Uri};

use super::errors::ApiError;

/// No route matches the path
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// The path exists but not for this method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}
