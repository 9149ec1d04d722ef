//! Read transaction record lists from JSON sources.
//!
//! Accepts a JSON array of records or newline-delimited JSON (one record per
//! line), optionally gzip-compressed. Loading only parses; structural checks
//! happen when the records are aggregated.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Result;
use crate::models::TransactionRecord;

/// Parse a JSON array of records.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Parse newline-delimited JSON, one record per line. Blank lines are skipped.
pub fn read_ndjson<R: BufRead>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// Load records from a file, choosing the format from its extension.
///
/// `.ndjson` and `.jsonl` are read line by line, anything else as a JSON
/// array. A trailing `.gz` (e.g. `payments.ndjson.gz`) is decompressed first.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRecord>> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;

    let (compressed, format_path) = match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => (true, path.with_extension("")),
        _ => (false, path.to_path_buf()),
    };
    let line_delimited = matches!(
        format_path.extension().and_then(|e| e.to_str()),
        Some("ndjson") | Some("jsonl")
    );

    let reader: Box<dyn Read> = if compressed {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(file)
    };

    let records = if line_delimited {
        read_ndjson(BufReader::new(reader))?
    } else {
        read_json(reader)?
    };
    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
