//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits with status 1.

use std::io;

use thiserror::Error;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid arguments or environment
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bind or serve failure
    #[error("Server error: {0}")]
    Io(#[from] io::Error),

    /// Health endpoint unreachable
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Health endpoint answered with a non-200 status
    #[error("Health check failed with status: {0}")]
    HealthCheckStatus(u16),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this is a health check outcome rather than a fault.
    ///
    /// Health check results, pass or fail, are reported on stdout.
    pub fn is_health_check(&self) -> bool {
        matches!(self, Self::HealthCheckFailed(_) | Self::HealthCheckStatus(_))
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "PRODUCT_CLI_CONFIG_ERROR",
            Self::Io(_) => "PRODUCT_CLI_IO_ERROR",
            Self::HealthCheckFailed(_) | Self::HealthCheckStatus(_) => "PRODUCT_CLI_HEALTH_CHECK_FAILED",
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        Self::HealthCheckFailed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
