//! Binary entry point for redline.
//!
//! This binary provides the CLI interface for the redline filter.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use redline::cli::{Cli, FilterCommand};
use redline::observability;
use std::process::ExitCode;

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init_from_env(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match FilterCommand::from(&cli).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
