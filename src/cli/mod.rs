//! Command-line interface.
//!
//! ```bash
//! # stdin to stdout
//! cat notes.txt | redline
//!
//! # file to stdout
//! redline notes.txt
//!
//! # file to file (created or truncated)
//! redline notes.txt notes.redacted.txt
//!
//! # alternate word list
//! redline --config ./team_words.txt notes.txt
//! ```

mod filter;

pub use filter::FilterCommand;

use clap::Parser;
use std::path::PathBuf;

/// Environment variable overriding the word list path.
pub const CONFIG_PATH_ENV: &str = "REDLINE_CONFIG";

/// Redline - redact blocked words from text.
#[derive(Debug, Parser)]
#[command(name = "redline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the blocked words file [default: ~/.blocked_words.txt].
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// File to read [default: stdin].
    pub input: Option<PathBuf>,

    /// File to write, created or truncated [default: stdout].
    pub output: Option<PathBuf>,
}

impl From<&Cli> for FilterCommand {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.config.clone(), cli.input.clone(), cli.output.clone())
    }
}
