//! The filter command: wires the word list, input and output together.

use crate::censor::LineCensor;
use crate::config::{BlockedWordConfig, resolve_config_path};
use crate::filter::{FilterStats, process};
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filter command handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCommand {
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl FilterCommand {
    /// Creates a filter command.
    ///
    /// `None` for `config_path` means `~/.blocked_words.txt`; `None` for
    /// `input` and `output` means stdin and stdout.
    #[must_use]
    pub const fn new(
        config_path: Option<PathBuf>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            config_path,
            input,
            output,
        }
    }

    /// Runs the command against the real stdin, stdout and terminal.
    ///
    /// # Errors
    ///
    /// See [`FilterCommand::execute`].
    pub fn run(&self) -> Result<FilterStats> {
        self.execute(io::stdin().is_terminal())
    }

    /// Runs the command.
    ///
    /// Checks happen in this order, and nothing is written until all of
    /// them have passed: terminal stdin, word list permissions and contents,
    /// input file, output file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoInput`] when reading stdin that is a terminal, and
    /// any error from loading the word list, opening the input, creating the
    /// output or filtering.
    pub fn execute(&self, stdin_is_terminal: bool) -> Result<FilterStats> {
        if self.input.is_none() && stdin_is_terminal {
            return Err(Error::NoInput);
        }

        let config_path = resolve_config_path(self.config_path.as_deref())?;
        let config = BlockedWordConfig::load_from_file(&config_path)?;
        let censor = LineCensor::new(&config);

        let stats = match (&self.input, &self.output) {
            (Some(input), Some(output)) => {
                let reader = open_input(input)?;
                let writer = create_output(output)?;
                debug!(input = %input.display(), output = %output.display(), "filtering file to file");
                process(reader, writer, &censor)?
            },
            (Some(input), None) => {
                let reader = open_input(input)?;
                debug!(input = %input.display(), "filtering file to stdout");
                process(reader, io::stdout().lock(), &censor)?
            },
            (None, _) => {
                debug!("filtering stdin to stdout");
                process(io::stdin().lock(), io::stdout().lock(), &censor)?
            },
        };

        info!(
            lines = stats.lines,
            censored = stats.censored,
            "redaction complete"
        );
        Ok(stats)
    }
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::operation("open_input", format!("{}: {e}", path.display())))
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path)
        .map_err(|e| Error::operation("create_output", format!("{}: {e}", path.display())))
}
