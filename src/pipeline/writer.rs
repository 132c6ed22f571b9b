//! Output serialization.
//!
//! Writes the ranked selection as comma-delimited text into a dated file:
//! one configured header line, then one line per selected record in rank
//! order, fields joined with `,` regardless of the input delimiter, no
//! quoting, trailing newline after every row including the last.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::Result;
use crate::models::FilteredRecord;

/// Write the ranked selection to `<output_dir>/<timestamp>.csv`.
///
/// The output directory is created when absent. An empty selection still
/// produces a file containing just the header line. Returns the path of the
/// written file.
pub fn write_selection(
    output_dir: &Path,
    timestamp_pattern: &str,
    column_headers: &[String],
    selection: &[FilteredRecord],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let timestamp = Local::now().format(timestamp_pattern).to_string();
    let path = output_dir.join(format!("{}.csv", timestamp));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, column_headers, selection)?;
    writer.flush()?;

    info!(
        "Wrote {} selected records to {}",
        selection.len(),
        path.display()
    );
    Ok(path)
}

/// Serialize header and selection rows to any writer.
fn write_rows(
    writer: &mut impl Write,
    column_headers: &[String],
    selection: &[FilteredRecord],
) -> Result<()> {
    writeln!(writer, "{}", column_headers.join(","))?;
    for record in selection {
        writeln!(writer, "{}", record.output_fields().join(","))?;
    }
    Ok(())
}
