//! Structured logging configuration.

use std::path::PathBuf;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_FILTER_ENV: &str = "REDLINE_LOG";
/// Environment variable selecting the log format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "REDLINE_LOG_FORMAT";
/// Environment variable naming a file to append logs to.
pub const LOG_FILE_ENV: &str = "REDLINE_LOG_FILE";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to [`LogFormat::Pretty`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration.
///
/// Logs never go to stdout, which carries the filtered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `redline=debug`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from the process environment.
    ///
    /// `verbose` raises the default level to `debug`; an explicit
    /// `REDLINE_LOG` directive still wins.
    #[must_use]
    pub fn from_env(verbose: bool) -> Self {
        Self::from_lookup(verbose, |key| std::env::var(key).ok())
    }

    /// Builds logging configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(verbose: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let filter = non_empty(LOG_FILTER_ENV).unwrap_or_else(|| {
            (if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }).to_string()
        });
        let format = non_empty(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        let file = non_empty(LOG_FILE_ENV).map(PathBuf::from);

        Self {
            filter,
            format,
            file,
        }
    }
}
