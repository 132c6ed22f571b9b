//! Pipeline orchestration for the selector CLI.
//!
//! Runs the stages strictly in order: control-number gate, catalog reader,
//! field-of-view filter, top-N selector, output writer. Each stage consumes
//! the full output of the previous one before the next starts.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::catalog::control::validate_control_number;
use crate::catalog::reader::read_catalog;
use crate::cli::args::Args;
use crate::cli::input;
use crate::config::SelectorConfig;
use crate::error::Result;
use crate::models::ObservationParams;
use crate::pipeline::filter::filter_by_window;
use crate::pipeline::selection::select_top_n;
use crate::pipeline::writer::write_selection;

/// Summary of one completed selection run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records_scanned: usize,
    pub records_matched: usize,
    pub records_selected: usize,
    pub output_path: PathBuf,
}

/// Run one selection end to end.
///
/// Returns `Ok(None)` when the user aborts at an interactive prompt; nothing
/// is read or written in that case.
pub fn run(args: &Args) -> Result<Option<RunSummary>> {
    args.validate()?;

    let config = match &args.config_file {
        Some(path) => SelectorConfig::load(path)?,
        None => {
            let config = SelectorConfig::default();
            config.validate()?;
            config
        }
    };

    let rank_column = config.rank_column()?;
    debug!("Ranking output by {}", rank_column);

    // Observation parameters come from flags when all five are present,
    // otherwise from the interactive prompts.
    let params = if args.has_all_params() {
        ObservationParams {
            ra: args.ra.unwrap_or_default(),
            dec: args.dec.unwrap_or_default(),
            fov_h: args.fov_width.unwrap_or_default(),
            fov_v: args.fov_height.unwrap_or_default(),
            top_n: args.top_n.unwrap_or_default(),
        }
    } else {
        match input::collect_observation_params()? {
            Some(params) => params,
            None => {
                info!("Run aborted at parameter prompt");
                return Ok(None);
            }
        }
    };

    // Integrity gate: the whole file is read and cross-checked before any
    // row reaches the reader. Only meaningful when a file header exists.
    if config.input.has_file_header {
        let header_regex = config.header_regex()?;
        validate_control_number(
            &config.input.path,
            &header_regex,
            config.input.has_column_headers,
            config.input.trailing_blank,
        )?;
    }

    let records = read_catalog(
        &config.input.path,
        config.input.delimiter,
        config.input.has_file_header,
    )?;
    let records_scanned = records.len();

    let filtered = filter_by_window(
        &records,
        config.input.has_column_headers,
        &params,
        &config.input.columns,
    )?;

    let selection = select_top_n(&filtered, params.top_n, rank_column);

    let output_path = write_selection(
        &config.output.directory,
        &config.output.timestamp_pattern,
        &config.output.column_headers,
        &selection,
    )?;

    Ok(Some(RunSummary {
        records_scanned,
        records_matched: filtered.len(),
        records_selected: selection.len(),
        output_path,
    }))
}
