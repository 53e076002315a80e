//! PAP binary entry point
//!
//! Parses arguments, runs one command, and reports its outcome. This is the
//! only place that decides the exit status.

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use pap::{cli::Args, commands, config::Config, notification, pulse::Pactl};
use std::process::ExitCode;
use tracing::warn;

/// Initialize logging to stderr, `RUST_LOG` overriding the default filter
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    // Install color-eyre for panic handling
    color_eyre::install()?;

    let args = Args::parse();

    let Some(command) = args.command.clone() else {
        Args::command().print_long_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config.log_filter());

    let notifier = notification::for_config(&config);

    let (message, code) = match commands::run(&config, &Pactl, &command) {
        Ok(Some(message)) => (message, ExitCode::SUCCESS),
        Ok(None) => return Ok(ExitCode::SUCCESS),
        Err(e) => (e.to_string(), ExitCode::FAILURE),
    };

    if let Err(e) = notifier.notify(&message) {
        // Outcome still reaches the user when no notification daemon runs
        warn!("{}", e);
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(code)
}
