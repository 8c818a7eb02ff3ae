//! CLI command implementations
//!
//! - serve: run the HTTP server until a shutdown signal
//! - health: probe the local `/health` endpoint once and report

use std::time::Duration;

use reqwest::StatusCode;

use super::args::Cli;
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, ServiceConfig};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Dispatch on parsed arguments
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = cli.config();

    if cli.health {
        health_check(&config).await?;
        println!("Health check passed");
        return Ok(());
    }

    serve(config).await
}

/// Run the HTTP server
pub async fn serve(config: ServiceConfig) -> CliResult<()> {
    HttpServer::with_config(config).start().await?;
    Ok(())
}

/// One-shot GET against this instance's health endpoint
pub async fn health_check(config: &ServiceConfig) -> CliResult<()> {
    let client = reqwest::Client::builder()
        .timeout(HEALTH_CHECK_TIMEOUT)
        .build()?;

    let response = client.get(config.health_url()).send().await?;

    match response.status() {
        StatusCode::OK => Ok(()),
        status => Err(CliError::HealthCheckStatus(status.as_u16())),
    }
}
