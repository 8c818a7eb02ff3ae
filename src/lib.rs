//! product-service - Product catalog microservice
//!
//! CRUD over an in-memory product collection, served as JSON over HTTP,
//! with liveness and readiness probes.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
