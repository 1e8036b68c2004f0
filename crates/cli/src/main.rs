//! Spotlight CLI
//!
//! Runs one promotion operation against a JSON data file and prints the result as JSON.

use std::{
    io::{self, Write},
    process::{self, ExitCode},
};

use serde_json::Value;
use tracing::error;

use spotlight::prelude::*;
use spotlight_app::context::AppContext;

use crate::{config::CliConfig, errors::CliError, observability::init_subscriber};

mod commands;
mod config;
mod errors;
mod observability;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(parse_error) => parse_error.exit(),
    };

    if let Err(init_error) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for setup errors"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            error!(error = ?run_error, "{run_error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let (app, store) = AppContext::from_data_file(&config.store.data_file).await?;

    commands::startup_sweep(
        &app,
        config.store.sweep_on_start,
        &config.command,
        ExpiresAt::now(),
    )
    .await;

    let output = commands::execute(&app, &store, config.command).await?;

    write_output(&output)
}

fn write_output(output: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();

    serde_json::to_writer_pretty(&mut stdout, output)?;

    writeln!(stdout)?;

    Ok(())
}
