//! The read, censor, write loop.

use crate::censor::{LineCensor, is_comment};
use crate::config::strip_line_ending;
use crate::{Error, Result};
use std::io::{self, BufRead, BufWriter, Write};
use tracing::{debug, instrument, warn};

/// Counters collected while filtering a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input.
    pub lines: usize,
    /// Comment lines passed through unchanged.
    pub comments: usize,
    /// Lines whose text was changed by the censor.
    pub censored: usize,
}

/// Copies `input` to `output` line by line, censoring every non-comment line.
///
/// Lines are read as raw bytes, so input in any encoding is censored.
/// Line terminators (`\n` or `\r\n`) are stripped on read and every output
/// line ends with `\n`, so the output has exactly one line per input line.
/// Output is buffered and flushed once the input is exhausted. If reading
/// fails part way, the lines already processed are flushed before the error
/// is returned.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if reading the input, writing or
/// flushing the output fails.
#[instrument(skip_all)]
pub fn process<R, W>(mut input: R, output: W, censor: &LineCensor<'_>) -> Result<FilterStats>
where
    R: BufRead,
    W: Write,
{
    let mut writer = BufWriter::new(output);
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                if let Err(flush_err) = writer.flush() {
                    warn!(error = %flush_err, "failed to flush output after read error");
                }
                return Err(Error::operation("read_input", e));
            },
        }
        let line = strip_line_ending(&buf);
        stats.lines += 1;

        let written = if is_comment(line) {
            stats.comments += 1;
            write_line(&mut writer, line)
        } else {
            let censored = censor.censor(line);
            if *censored != *line {
                stats.censored += 1;
            }
            write_line(&mut writer, &censored)
        };
        written.map_err(|e| Error::operation("write_output", e))?;
    }

    writer
        .flush()
        .map_err(|e| Error::operation("flush_output", e))?;

    debug!(
        lines = stats.lines,
        comments = stats.comments,
        censored = stats.censored,
        "filtered input"
    );
    Ok(stats)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")
}
