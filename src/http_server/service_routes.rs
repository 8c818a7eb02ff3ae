//! Service HTTP Routes
//!
//! Service descriptor, liveness and readiness endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fallbacks::method_not_allowed;
use super::state::AppState;

/// Service name reported by probes
pub const SERVICE_NAME: &str = "product-service";

/// Service descriptor returned by `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub description: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub ready: String,
    pub products: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started
    pub uptime: f64,
    pub environment: String,
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

/// Create service routes
pub fn service_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .route("/ready", get(readiness_handler).fallback(method_not_allowed))
        .with_state(state)
}

/// GET / - static service descriptor
async fn root_handler() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: "Product Service".to_string(),
        version: "1.0.0".to_string(),
        description: "Product catalog microservice".to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            ready: "/ready".to_string(),
            products: "/products".to_string(),
        },
    })
}

/// GET /health - liveness report
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
        uptime: state.uptime().as_secs_f64(),
        environment: state.environment.clone(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /ready - readiness report
async fn readiness_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, label) = if state.is_ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    };

    let response = ReadinessResponse {
        status: label.to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
    };

    (status, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now(),
            uptime: 1.5,
            environment: "test".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["uptime"], 1.5);
        assert!(json["timestamp"].is_string());
    }
}
