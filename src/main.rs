//! Product Service entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments and environment (via cli::Cli::load)
//! 2. Installs the log subscriber
//! 3. Dispatches to the server or the health check (via cli::run)
//! 4. Prints errors (health check results to stdout, faults to stderr) and
//!    exits non-zero on failure

use std::process::ExitCode;

use product_service::{cli, observability};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::Cli::load() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !args.health {
        observability::init_tracing(&args.log_level);
    }

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_health_check() => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
