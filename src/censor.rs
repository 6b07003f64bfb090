//! Line censoring.
//!
//! Replaces blocked words in a single line. Lines are raw bytes: input that
//! is not valid UTF-8 is still censored rather than rejected.

use crate::config::BlockedWordConfig;
use regex::bytes::NoExpand;
use std::borrow::Cow;

/// Returns true if the line is a comment: its first non-blank character is `#`.
///
/// Leading whitespace is matched Unicode-aware; an invalid byte counts as
/// non-blank.
#[must_use]
pub fn is_comment(line: &[u8]) -> bool {
    for chunk in line.utf8_chunks() {
        let rest = chunk.valid().trim_start();
        if !rest.is_empty() {
            return rest.starts_with('#');
        }
        if !chunk.invalid().is_empty() {
            return false;
        }
    }
    false
}

/// Censors lines against a [`BlockedWordConfig`].
///
/// Words are applied one pass at a time in configuration order. Each pass
/// replaces every non-overlapping occurrence of one word before the next word
/// runs, so a later word can match text produced by an earlier replacement.
#[derive(Debug, Clone, Copy)]
pub struct LineCensor<'a> {
    config: &'a BlockedWordConfig,
}

impl<'a> LineCensor<'a> {
    /// Creates a censor over the given configuration.
    #[must_use]
    pub const fn new(config: &'a BlockedWordConfig) -> Self {
        Self { config }
    }

    /// Replaces every blocked word in `line` with the redaction token.
    ///
    /// Borrows `line` when no word matched. Comment lines are not special
    /// here; see [`LineCensor::apply`].
    #[must_use]
    pub fn censor<'l>(&self, line: &'l [u8]) -> Cow<'l, [u8]> {
        let redaction = self.config.redaction();
        let mut line = Cow::Borrowed(line);
        for word in self.config.words() {
            let replaced = match word.matcher().replace_all(&line, NoExpand(redaction)) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            line = Cow::Owned(replaced);
        }
        line
    }

    /// Censors `line` unless it is a comment, which is returned unchanged.
    #[must_use]
    pub fn apply<'l>(&self, line: &'l [u8]) -> Cow<'l, [u8]> {
        if is_comment(line) {
            Cow::Borrowed(line)
        } else {
            self.censor(line)
        }
    }
}
