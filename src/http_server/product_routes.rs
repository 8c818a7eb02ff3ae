//! Product HTTP Routes
//!
//! CRUD endpoints over the in-memory product store.
//!
//! Handlers validate the path id and decode the body before touching the
//! store, so malformed input never mutates state. Bodies are decoded from
//! raw bytes: the request `Content-Type` is not consulted.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};
use super::fallbacks::method_not_allowed;
use super::state::AppState;
use crate::store::{Product, ProductInput};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products_handler)
                .post(create_product_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse a path segment as a base-10 product id
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Id from the extracted path; an undecodable segment is an invalid id too
fn path_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => Err(ApiError::InvalidId(rejection.body_text())),
    }
}

/// Decode a product payload, defaulting any missing field
fn decode_input(body: &[u8]) -> ApiResult<ProductInput> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

/// GET /products
async fn list_products_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.store.list())
}

/// POST /products
async fn create_product_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input = decode_input(&body)?;
    let product = state.store.create(input);

    tracing::info!(id = product.id, "created product");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/:id
async fn get_product_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = path_id(path)?;

    state
        .store
        .get(id)
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// PUT /products/:id
async fn update_product_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let id = path_id(path)?;
    let input = decode_input(&body)?;

    let product = state.store.update(id, input)?;

    tracing::info!(id, "updated product");
    Ok(Json(product))
}

/// DELETE /products/:id
async fn delete_product_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = path_id(path)?;

    state.store.delete(id)?;

    tracing::info!(id, "deleted product");
    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
