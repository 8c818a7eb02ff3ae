//! # HTTP Server
//!
//! Main HTTP server combining the service and product routers behind the
//! CORS and request-logging layers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use super::config::ServiceConfig;
use super::fallbacks::route_not_found;
use super::middleware::{allow_headers_layer, allow_methods_layer, cors_layer, trace_layer};
use super::product_routes::product_routes;
use super::service_routes::service_routes;
use super::shutdown::shutdown_signal;
use super::state::AppState;
use crate::store::ProductStore;

/// HTTP Server for the product catalog
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a new HTTP server with a fresh, empty store
    pub fn with_config(config: ServiceConfig) -> Self {
        let state = Arc::new(AppState::new(
            Arc::new(ProductStore::new()),
            config.environment.clone(),
        ));
        Self::with_state(config, state)
    }

    /// Create a new HTTP server around existing shared state
    pub fn with_state(config: ServiceConfig, state: Arc<AppState>) -> Self {
        let router = build_router(state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;

        tracing::info!(%addr, environment = %self.config.environment, "Product Service starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Product Service stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(service_routes(state.clone()))
        .merge(product_routes(state))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer())
                .layer(allow_methods_layer())
                .layer(allow_headers_layer())
                .layer(cors_layer()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = ServiceConfig::with_port(8080);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new();
        let _router = server.router();
    }
}
