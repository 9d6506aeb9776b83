//! Perft listing files: one `<token>: <value>` record per line.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Literal separator between token and value.
pub const SEPARATOR: &str = ": ";

/// One parsed listing line. Token is typically a move in notation and value
/// a node count, but the comparator treats both as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub token: String,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line_no}: expected exactly one {SEPARATOR:?} in {line:?}")]
    Malformed { line_no: usize, line: String },
}

/// Parses one non-empty line. The separator must occur exactly once;
/// anything else is fatal for the whole listing.
pub fn parse_line(line_no: usize, line: &str) -> Result<Record, ListingError> {
    match line.split_once(SEPARATOR) {
        Some((token, value)) if !value.contains(SEPARATOR) => Ok(Record {
            token: token.to_string(),
            value: value.to_string(),
        }),
        _ => Err(ListingError::Malformed {
            line_no,
            line: line.to_string(),
        }),
    }
}

/// Parses a whole listing. Empty lines (the trailing newline included) are
/// skipped; `\r` line endings from a Windows-built engine are tolerated.
pub fn parse_listing(text: &str) -> Result<Vec<Record>, ListingError> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }
    Ok(records)
}

pub fn read_listing(path: &Path) -> Result<Vec<Record>, ListingError> {
    let text = fs::read_to_string(path).map_err(|source| ListingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_listing(&text)
}
