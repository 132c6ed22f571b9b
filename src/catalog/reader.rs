//! Catalog file reading.
//!
//! Produces the ordered record sequence the downstream stages consume. The
//! reader is deliberately simple: one physical line is one record, split on a
//! single delimiter character with no quoting or escaping. Blank lines are
//! kept as records with a single empty field so row indexing stays aligned
//! with the physical file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SelectorError};
use crate::models::CatalogRecord;

/// Read the catalog file into an ordered sequence of records.
///
/// When `has_file_header` is set the first physical line is skipped
/// unconditionally. Re-reading the same file reproduces the same sequence.
pub fn read_catalog(
    path: &Path,
    delimiter: char,
    has_file_header: bool,
) -> Result<Vec<CatalogRecord>> {
    if !path.exists() {
        return Err(SelectorError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 && has_file_header {
            continue;
        }
        let fields = line.split(delimiter).map(|s| s.to_string()).collect();
        records.push(CatalogRecord::new(fields));
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
