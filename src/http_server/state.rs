//! Shared handler state

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::store::ProductStore;

/// State shared across all handlers
#[derive(Debug)]
pub struct AppState {
    pub store: Arc<ProductStore>,
    pub environment: String,
    started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<ProductStore>, environment: impl Into<String>) -> Self {
        Self {
            store,
            environment: environment.into(),
            started_at: Instant::now(),
        }
    }

    /// Time since this state was constructed
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Readiness check.
    ///
    /// The store has no external dependencies, so the service is ready as
    /// soon as it is serving.
    pub fn is_ready(&self) -> bool {
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ProductStore::new()), super::config::default_environment())
    }
}
