//! Observability for the product service
//!
//! Logging only: request spans come from the HTTP trace layer, handler and
//! store events from `tracing` macros at the call sites.

mod logger;

pub use logger::{env_filter, init_tracing};
