//! Blocked-word configuration.
//!
//! The word list is a small line-oriented text file, by default
//! `~/.blocked_words.txt`:
//!
//! ```text
//! # comments and blank lines are ignored
//! redaction: [censored]
//! hunter2
//! Project Nightingale
//! ```
//!
//! Every other line is one literal blocked word. A single `redaction:` line
//! replaces the default token (`redacted`). The file must be mode `0700`
//! before it is read at all, see [`check_permissions`].

mod permissions;

pub use permissions::check_permissions;

use crate::{Error, Result};
use regex::bytes::Regex;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Token substituted for blocked words when the list does not set one.
pub const DEFAULT_REDACTION: &str = "redacted";

/// File name of the word list inside the home directory.
pub const DEFAULT_FILE_NAME: &str = ".blocked_words.txt";

const REDACTION_DIRECTIVE: &[u8] = b"redaction:";

/// A single blocked word and its compiled matcher.
///
/// Words are raw bytes, so a list saved in a legacy encoding still matches
/// input in that encoding. The matcher is built from the escaped literal, so
/// characters such as `.` or `*` only ever match themselves.
#[derive(Debug, Clone)]
pub struct BlockedWord {
    literal: Vec<u8>,
    matcher: Regex,
}

impl BlockedWord {
    /// Compiles an already trimmed, non-empty literal.
    pub(crate) fn new(literal: &[u8]) -> Result<Self> {
        let matcher = Regex::new(&literal_pattern(literal))
            .map_err(|e| Error::operation("compile_blocked_word", e))?;

        Ok(Self {
            literal: literal.to_vec(),
            matcher,
        })
    }

    /// Returns the literal bytes being blocked.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.literal
    }

    /// Returns the matcher for this word.
    #[must_use]
    pub const fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

impl PartialEq for BlockedWord {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for BlockedWord {}

/// Builds a pattern matching exactly `literal`.
///
/// Bytes that are not UTF-8 are spelled out as `\xNN` with Unicode mode off.
fn literal_pattern(literal: &[u8]) -> String {
    match std::str::from_utf8(literal) {
        Ok(text) => regex::escape(text),
        Err(_) => {
            let mut pattern = String::from("(?-u:");
            for byte in literal {
                let _ = write!(pattern, "\\x{byte:02X}");
            }
            pattern.push(')');
            pattern
        },
    }
}

/// Trims surrounding whitespace, Unicode-aware when the line is UTF-8.
fn trim(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    }
}

/// Classification of one physical line of the word list.
#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    /// Blank or `#` comment.
    Skip,
    /// `redaction: <token>`.
    Redaction(&'a [u8]),
    /// Anything else.
    Word(&'a [u8]),
}

impl<'a> Directive<'a> {
    fn classify(line: &'a [u8]) -> Self {
        let line = trim(line);
        if line.is_empty() || line.starts_with(b"#") {
            return Self::Skip;
        }
        match line.strip_prefix(REDACTION_DIRECTIVE) {
            Some(token) => Self::Redaction(trim(token)),
            None => Self::Word(line),
        }
    }
}

/// Strips one trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(line: &[u8]) -> &[u8] {
    match line.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => line,
    }
}

/// The immutable set of blocked words plus the redaction token.
///
/// Words keep the order in which they appear in the file; the censor applies
/// them in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedWordConfig {
    words: Vec<BlockedWord>,
    redaction: Vec<u8>,
}

impl Default for BlockedWordConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            redaction: DEFAULT_REDACTION.as_bytes().to_vec(),
        }
    }
}

impl BlockedWordConfig {
    /// Builds a configuration from literal words and a redaction token.
    ///
    /// Words are trimmed; blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a word cannot be compiled into a matcher.
    pub fn new<I, S>(words: I, redaction: impl Into<Vec<u8>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let words = words
            .into_iter()
            .map(|word| trim(word.as_ref()).to_vec())
            .filter(|word| !word.is_empty())
            .map(|word| BlockedWord::new(&word))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            words,
            redaction: redaction.into(),
        })
    }

    /// Loads the word list from a file after verifying its permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not mode `0700`, cannot be opened or
    /// read, or defines the redaction token more than once.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        check_permissions(path)?;

        let file = File::open(path).map_err(|e| {
            Error::operation("open_config", format!("{}: {e}", path.display()))
        })?;

        let config = Self::from_reader(BufReader::new(file), path)?;
        debug!(
            words = config.len(),
            custom_redaction = config.redaction != DEFAULT_REDACTION.as_bytes(),
            "loaded blocked word list"
        );
        Ok(config)
    }

    /// Parses a word list from any buffered reader.
    ///
    /// `origin` only names the source in error messages. A `redaction:` line
    /// is rejected once the token already differs from [`DEFAULT_REDACTION`],
    /// so restating the default before a custom token is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the redaction token is defined
    /// more than once.
    pub fn from_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<Self> {
        let mut words = Vec::new();
        let mut redaction = DEFAULT_REDACTION.as_bytes().to_vec();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
                Error::operation("read_config", format!("{}: {e}", origin.display()))
            })?;
            if read == 0 {
                break;
            }

            match Directive::classify(strip_line_ending(&buf)) {
                Directive::Skip => {},
                Directive::Redaction(token) => {
                    if redaction != DEFAULT_REDACTION.as_bytes() {
                        return Err(Error::DuplicateRedaction {
                            path: origin.to_path_buf(),
                        });
                    }
                    redaction = token.to_vec();
                },
                Directive::Word(word) => words.push(BlockedWord::new(word)?),
            }
        }

        Ok(Self { words, redaction })
    }

    /// Returns the blocked words in file order.
    #[must_use]
    pub fn words(&self) -> &[BlockedWord] {
        &self.words
    }

    /// Returns the redaction token.
    #[must_use]
    pub fn redaction(&self) -> &[u8] {
        &self.redaction
    }

    /// Returns the number of blocked words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are blocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns `<home>/.blocked_words.txt`.
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] if the home directory is unknown.
pub fn default_config_path() -> Result<PathBuf> {
    let base_dirs = directories::BaseDirs::new().ok_or(Error::HomeDirUnavailable)?;
    Ok(base_dirs.home_dir().join(DEFAULT_FILE_NAME))
}

/// Picks the word list path: an explicit path wins over the default.
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] if no path was given and the home
/// directory is unknown.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}
