//! Structured logging setup
//!
//! All crate logging goes through `tracing`. The binary installs a
//! `fmt` subscriber once at startup; `RUST_LOG` takes precedence over the
//! configured default level.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` if set and valid, else `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// Returns false if a subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        init_tracing("debug");
        assert!(!init_tracing("debug"));
    }
}
