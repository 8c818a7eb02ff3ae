//! # Product Service HTTP Server Module
//!
//! Axum server exposing the product store over JSON.
//!
//! # Endpoints
//!
//! - `/` - Service descriptor
//! - `/health` - Liveness report
//! - `/ready` - Readiness report
//! - `/products` - List and create products
//! - `/products/:id` - Fetch, replace and delete one product

pub mod config;
pub mod errors;
pub mod fallbacks;
pub mod middleware;
pub mod product_routes;
pub mod server;
pub mod service_routes;
pub mod shutdown;
pub mod state;

pub use config::ServiceConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
