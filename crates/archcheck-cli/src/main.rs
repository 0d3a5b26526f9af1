//! Archcheck CLI - scans a directory tree and verifies the integrity of the
//! ZIP and 7z archives it contains.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match commands::check::execute(&cli, &*formatter) {
        Ok(code) => code,
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "warn,archcheck_core=debug"
    } else {
        "warn"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
