//! CLI argument definitions using clap
//!
//! Every option can also be supplied through its environment variable:
//! - product-service [--port <PORT>] [--host <HOST>] [--environment <ENV>]
//! - product-service --health

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use super::errors::{CliError, CliResult};
use crate::http_server::ServiceConfig;

/// Product Service - product catalog microservice
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "product-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run a one-shot health check against the local instance and exit
    #[arg(long)]
    pub health: bool,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// Host address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Environment name reported by /health
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Load `.env` (if present), then parse process arguments and environment
    pub fn load() -> CliResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        Self::parse_from_args(std::env::args_os())
    }

    /// Parse an explicit argument list.
    ///
    /// `--help` and `--version` print and exit; any other parse failure,
    /// such as a non-numeric `PORT`, becomes a config error.
    pub fn parse_from_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = args.into_iter().map(|arg| normalize_legacy_flag(arg.into()));

        Cli::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => CliError::config(e.to_string()),
        })
    }

    /// Service configuration described by these arguments
    pub fn config(&self) -> ServiceConfig {
        ServiceConfig {
            host: self.host.clone(),
            port: self.port,
            environment: self.environment.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

/// Accept the single-dash `-health` spelling used by existing container probes
fn normalize_legacy_flag(arg: OsString) -> OsString {
    if arg.to_str() == Some("-health") {
        OsString::from("--health")
    } else {
        arg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_flag_spellings() {
        let cli = Cli::parse_from_args(["product-service", "--health"]).unwrap();
        assert!(cli.health);

        let cli = Cli::parse_from_args(["product-service", "-health"]).unwrap();
        assert!(cli.health);
    }

    #[test]
    fn test_explicit_port() {
        let cli = Cli::parse_from_args(["product-service", "--port", "9100"]).unwrap();
        assert_eq!(cli.config().port, 9100);
        assert!(!cli.health);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = Cli::parse_from_args(["product-service", "--port", "eighty"]).unwrap_err();
        assert_eq!(err.code_str(), "PRODUCT_CLI_CONFIG_ERROR");
    }
}
