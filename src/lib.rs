//! # Redline
//!
//! A line-oriented filter that redacts blocked words from text streams.
//!
//! Redline reads a private word list (by default `~/.blocked_words.txt`,
//! which must be mode `0700`), then copies its input to its output line by
//! line, replacing every occurrence of every blocked word with a redaction
//! token. Lines whose first non-blank character is `#` pass through
//! untouched.
//!
//! ## Example
//!
//! ```rust
//! use redline::{BlockedWordConfig, LineCensor};
//!
//! let config = BlockedWordConfig::new(["cat"], "X")?;
//! let censor = LineCensor::new(&config);
//!
//! assert_eq!(censor.apply(b"concatenate"), b"conXenate".as_slice());
//! assert_eq!(censor.apply(b"# cat stays"), b"# cat stays".as_slice());
//! # Ok::<(), redline::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

pub mod censor;
pub mod cli;
pub mod config;
pub mod filter;
pub mod observability;

pub use censor::{LineCensor, is_comment};
pub use config::{BlockedWord, BlockedWordConfig, DEFAULT_REDACTION};
pub use filter::{FilterStats, process};

/// Error type for redline operations.
///
/// Every variant is fatal: the binary prints it and exits non-zero.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InsecurePermissions` | The word list is not mode `0700` |
/// | `DuplicateRedaction` | The word list has a second `redaction:` line |
/// | `NoInput` | No arguments were given and stdin is a terminal |
/// | `HomeDirUnavailable` | No home directory to find the default word list |
/// | `OperationFailed` | Opening, reading, writing or flushing failed |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The word list is readable by someone other than its owner, or is not
    /// owner-executable.
    #[error("permission on {} must be 700, found {:o}", .path.display(), .mode)]
    InsecurePermissions {
        /// Path of the offending file.
        path: PathBuf,
        /// Permission bits found (`mode & 0o777`).
        mode: u32,
    },

    /// The word list sets the redaction token more than once.
    #[error("multiple redaction definitions found in {}", .path.display())]
    DuplicateRedaction {
        /// Path (or other origin) of the word list.
        path: PathBuf,
    },

    /// Invoked without arguments while stdin is an interactive terminal.
    #[error("no input provided")]
    NoInput,

    /// The home directory could not be determined.
    #[error("unable to determine the current user's home directory")]
    HomeDirUnavailable,

    /// An I/O operation failed.
    ///
    /// Raised when:
    /// - The word list, input or output file cannot be opened or created
    /// - Reading the word list or the input fails mid-stream
    /// - Writing or flushing the output fails
    /// - Logging cannot be initialized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and cause.
    pub fn operation(operation: &str, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.to_string(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for redline operations.
pub type Result<T> = std::result::Result<T, Error>;
