//! CLI module for the product service
//!
//! Provides command-line interface for:
//! - serving the product API (default)
//! - `--health`: one-shot self check used by container probes

mod args;
mod commands;
mod errors;

pub use args::Cli;
pub use commands::{health_check, run, serve};
pub use errors::{CliError, CliResult};
