//! Field-of-view filtering.
//!
//! Tests every catalog record against the rectangular observation window and
//! computes the planar distance from the window center for each match. A
//! record with an empty or unparseable mapped field aborts the whole run;
//! there is no per-record skip-and-continue fallback.

use tracing::{debug, info};

use crate::config::ColumnMap;
use crate::error::{Result, SelectorError};
use crate::models::{CatalogRecord, FilteredRecord, ObservationParams, ObservationWindow};

/// Filter records down to those inside the observation window.
///
/// When `has_column_headers` is set the record at position 0 is discarded
/// before scanning. Matches are returned in original scan order, renumbered
/// contiguously.
pub fn filter_by_window(
    records: &[CatalogRecord],
    has_column_headers: bool,
    params: &ObservationParams,
    columns: &ColumnMap,
) -> Result<Vec<FilteredRecord>> {
    let window = ObservationWindow::from_center(params.ra, params.dec, params.fov_h, params.fov_v);
    debug!(
        "Observation window: RA [{}, {}], Decl [{}, {}]",
        window.min_ra, window.max_ra, window.min_dec, window.max_dec
    );

    let skip = usize::from(has_column_headers);
    let mut matches = Vec::new();

    for (row, record) in records.iter().enumerate().skip(skip) {
        let id = parse_field(record, row, columns.id, "id", |s| s.parse::<i64>().ok())?;
        let ra = parse_field(record, row, columns.ra, "RA", |s| s.parse::<f64>().ok())?;
        let dec = parse_field(record, row, columns.dec, "Decl", |s| s.parse::<f64>().ok())?;
        let brightness = parse_field(record, row, columns.brightness, "brightness", |s| {
            s.parse::<f64>().ok()
        })?;

        if window.contains(ra, dec) {
            let distance = ((ra - params.ra).powi(2) + (dec - params.dec).powi(2)).sqrt();
            matches.push(FilteredRecord {
                id,
                ra,
                dec,
                brightness,
                distance,
            });
        }
    }

    info!(
        "{} of {} records inside the observation window",
        matches.len(),
        records.len().saturating_sub(skip)
    );
    Ok(matches)
}

/// Extract and parse one mapped field, failing the run when the field is
/// absent, empty, or not numeric.
fn parse_field<T>(
    record: &CatalogRecord,
    row: usize,
    column: usize,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let value = record.field(column).unwrap_or_default();
    if value.is_empty() {
        return Err(SelectorError::MissingValue { row, column });
    }
    parse(value).ok_or_else(|| SelectorError::Parse {
        row,
        field,
        value: value.to_string(),
    })
}
