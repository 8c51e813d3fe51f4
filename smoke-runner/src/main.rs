//! smoke - connection smoke-test harness
//!
//! Probes a messaging service twice: one paginated GET against the messages
//! resource, then one websocket session with a fire-and-forget auth frame
//! and a fixed listen window. Probe failures are diagnostics, not crashes;
//! by default the process exits 0 either way (pass `--strict` to gate on
//! the outcomes).
//!
//! # Examples
//!
//! ```bash
//! # Probe a local service with the defaults the service ships with
//! smoke
//!
//! # Probe a deployed instance and fail the pipeline on errors
//! smoke --server https://staging.example.com --strict
//! ```

mod cli;
mod error;
mod logger;
mod runner;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::runner::Runner;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use smoke_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = config.logging.file.clone().map(PathBuf::from);
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let runner = Runner::new(config);
    let results = runner.run().await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&results)
    } else {
        serde_json::to_string(&results)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("failed to serialize results: {}", e);
            return ExitCode::FAILURE;
        }
    }

    runner.exit_code(&results)
}

/// Load the configuration, layer CLI overrides on top, and validate the
/// combined result.
fn load_config(cli: &Cli) -> error::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;
    Ok(config)
}
