//! Instruction File Parser
//!
//! Drives the [`Classifier`] over a line source. Three entry points share the
//! same state machine: an in-memory line iterator, an async buffered reader,
//! and a file path.

pub mod classifier;
pub mod record;

pub use classifier::{Classifier, GroupPosition, ParseState};
pub use record::{ParsedRecord, RecordKind};

use std::io::ErrorKind;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::ValidationLimits;
use crate::core::ParseRun;
use crate::error::Result;

/// Parse lines that are already in memory
pub fn parse_lines<'l, I>(lines: I, limits: &ValidationLimits) -> Result<ParseRun>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut classifier = Classifier::new(limits);
    let mut records = Vec::new();

    for line in lines {
        if let Some(record) = classifier.feed(line)? {
            records.push(record);
        }
    }

    Ok(ParseRun::from_records(records))
}

/// Parse a whole text with default limits
pub fn parse_text(text: &str) -> Result<ParseRun> {
    parse_lines(text.lines(), &ValidationLimits::default())
}

/// Parse from an async line source, one line at a time
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, so a damaged ship line
/// fails its validator instead of ending the run.
pub async fn parse_reader<R>(mut reader: R, limits: &ValidationLimits) -> Result<ParseRun>
where
    R: AsyncBufRead + Unpin,
{
    let mut classifier = Classifier::new(limits);
    let mut records = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        if let Some(record) = classifier.feed(&String::from_utf8_lossy(line))? {
            records.push(record);
        }
    }

    Ok(ParseRun::from_records(records))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse an instruction file
///
/// A file (or directory) that does not exist is logged and yields an empty
/// run with [`ParseRun::input_missing`] set. Any other I/O failure, and an
/// invalid grid-size line, is returned as an error.
pub async fn parse_file(path: impl AsRef<Path>, limits: &ValidationLimits) -> Result<ParseRun> {
    let path = path.as_ref();

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("Issue opening file {}: {}", path.display(), e);
            return Ok(ParseRun::missing_input());
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Parsing instruction file {}", path.display());
    parse_reader(BufReader::new(file), limits).await
}
