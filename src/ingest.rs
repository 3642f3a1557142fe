//! Streaming line ingestion.
//!
//! Reads a record-per-line source, splits each line at the first space into
//! a first name and a full name, hashes the first name, and drives the
//! index. One pass builds the whole index; nothing is revisited.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::hash::first_name_key;
use crate::index::DedupIndex;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open source '{path}': {message}")]
    SourceUnavailable { path: String, message: String },

    #[error("Source is empty")]
    EmptySource,

    #[error("Failed to read from source: {message}")]
    ReadFailed { message: String },
}

/// Result of one ingestion pass: the built index plus line totals.
#[derive(Debug)]
pub struct Ingestion {
    pub index: DedupIndex,
    pub lines_read: usize,
    pub malformed_lines: usize,
}

/// Open `path` and ingest it line by line.
pub fn ingest_path(path: &Path) -> Result<Ingestion, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::SourceUnavailable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    ingest(BufReader::new(file))
}

/// Ingest an already-open line source and build the index.
///
/// Each line's text before the first space is the first name; the full name
/// is the whole line with its terminator removed. Lines without a space are
/// malformed: they are skipped with a diagnostic and counted, and never
/// abort the pass. A source that yields no lines at all is an error; a
/// source whose every line is malformed is not, and produces an empty index.
pub fn ingest<R: BufRead>(source: R) -> Result<Ingestion, IngestError> {
    let mut index = DedupIndex::new();
    let mut lines_read = 0;
    let mut malformed_lines = 0;

    for (line_no, line) in source.lines().enumerate() {
        let line = line.map_err(|e| IngestError::ReadFailed {
            message: e.to_string(),
        })?;
        lines_read += 1;

        let Some((first_name, _)) = line.split_once(' ') else {
            warn!(line = line_no + 1, "no first name detected, skipping line");
            malformed_lines += 1;
            continue;
        };

        let key = first_name_key(first_name.as_bytes());
        let first_name = first_name.to_string();
        index.insert_or_merge(key, line, first_name);
    }

    if lines_read == 0 {
        return Err(IngestError::EmptySource);
    }

    Ok(Ingestion {
        index,
        lines_read,
        malformed_lines,
    })
}
