//! Line-oriented scanning of error output.

use callsite_error::{
    CallsiteError, CallsiteErrorKind, CallsiteResult, DetectionConfig, split_prefix,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const STDIO: &str = "-";

/// Write `file<TAB>line` for every input line that carries a location.
///
/// With `all`, lines without a location produce an empty record so output
/// lines stay aligned with input lines. Returns the number of matched lines.
#[instrument(skip_all, fields(all = all))]
pub fn extract_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &DetectionConfig,
    all: bool,
) -> CallsiteResult<usize> {
    let mut matched = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| io_error(STDIO, e))?;
        let written = match split_prefix(&line, config) {
            Some(prefix) => {
                matched += 1;
                writeln!(writer, "{}\t{}", prefix.file, prefix.line)
            }
            None if all => writeln!(writer),
            None => Ok(()),
        };
        written.map_err(|e| io_error(STDIO, e))?;
    }
    writer.flush().map_err(|e| io_error(STDIO, e))?;
    debug!(matched, "Extracted locations");
    Ok(matched)
}

/// Write every input line with its location prefix removed.
///
/// Returns the number of lines that had a prefix.
#[instrument(skip_all)]
pub fn strip_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &DetectionConfig,
) -> CallsiteResult<usize> {
    let mut stripped = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| io_error(STDIO, e))?;
        let message = match split_prefix(&line, config) {
            Some(prefix) => {
                stripped += 1;
                prefix.message
            }
            None => line.as_str(),
        };
        writeln!(writer, "{}", message).map_err(|e| io_error(STDIO, e))?;
    }
    writer.flush().map_err(|e| io_error(STDIO, e))?;
    debug!(stripped, "Stripped locations");
    Ok(stripped)
}

/// Open `path` for buffered reading, or standard input when `None`.
#[track_caller]
pub fn open_input(path: Option<&Path>) -> CallsiteResult<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_error(path, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

#[track_caller]
fn io_error(path: impl Into<PathBuf>, err: io::Error) -> CallsiteError {
    CallsiteError::new(CallsiteErrorKind::Io {
        path: path.into(),
        message: err.to_string(),
    })
}
