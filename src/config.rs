//! Configuration management and validation.
//!
//! One `SelectorConfig` is constructed at startup (from a TOML file or from
//! defaults) and passed by reference into each pipeline stage. There is no
//! module-level configuration state.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_HEADER_PATTERN, DEFAULT_TIMESTAMP_PATTERN};
use crate::error::{Result, SelectorError};
use crate::models::RankColumn;

/// Zero-based field positions of the four mapped catalog columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMap {
    pub id: usize,
    pub ra: usize,
    pub dec: usize,
    pub brightness: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: 0,
            ra: 1,
            dec: 2,
            brightness: 3,
        }
    }
}

impl ColumnMap {
    /// The four mapped positions in a fixed order (id, ra, dec, brightness).
    pub fn positions(&self) -> [usize; 4] {
        [self.id, self.ra, self.dec, self.brightness]
    }
}

/// Whether a final empty line in the input file counts as a data row when
/// cross-checking the control number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBlankPolicy {
    /// A trailing blank line is not a data row and is excluded from the count.
    Exclude,
    /// Every physical line after the header counts, blank or not.
    Count,
}

impl Default for TrailingBlankPolicy {
    fn default() -> Self {
        TrailingBlankPolicy::Exclude
    }
}

/// Input-side configuration: file location, header flags, and column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the catalog file.
    pub path: PathBuf,

    /// First physical line is a non-data file header carrying the control number.
    pub has_file_header: bool,

    /// First data record is a column-header row to be discarded.
    pub has_column_headers: bool,

    /// Field delimiter character.
    pub delimiter: char,

    /// Pattern the file header line must match.
    pub header_pattern: String,

    /// How a trailing blank line is counted during control-number validation.
    pub trailing_blank: TrailingBlankPolicy,

    /// Field positions of the mapped columns.
    pub columns: ColumnMap,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.tsv"),
            has_file_header: true,
            has_column_headers: true,
            delimiter: crate::constants::DEFAULT_DELIMITER,
            header_pattern: DEFAULT_HEADER_PATTERN.to_string(),
            trailing_blank: TrailingBlankPolicy::default(),
            columns: ColumnMap::default(),
        }
    }
}

/// Output-side configuration: destination, naming, and ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the dated output file is written into.
    pub directory: PathBuf,

    /// chrono format pattern for the output file name.
    pub timestamp_pattern: String,

    /// Column header names written as the first output line.
    pub column_headers: Vec<String>,

    /// Name of the ranking column (ID, RA, DEC, BRI or DIST).
    pub order_by: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            timestamp_pattern: DEFAULT_TIMESTAMP_PATTERN.to_string(),
            column_headers: crate::constants::DEFAULT_OUTPUT_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            order_by: "BRI".to_string(),
        }
    }
}

/// Complete selector configuration, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl SelectorConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SelectorError::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SelectorConfig = toml::from_str(&content).map_err(|e| {
            SelectorError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        // The header pattern must compile
        Regex::new(&self.input.header_pattern).map_err(|e| {
            SelectorError::configuration(format!(
                "Invalid header pattern '{}': {}",
                self.input.header_pattern, e
            ))
        })?;

        // The ranking column must be one of the five output attributes
        RankColumn::from_str(&self.output.order_by)?;

        // Mapped column positions must be distinct
        let mut positions = self.input.columns.positions();
        positions.sort_unstable();
        if positions.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(SelectorError::configuration(format!(
                "Column positions must be distinct: id={}, ra={}, dec={}, brightness={}",
                self.input.columns.id,
                self.input.columns.ra,
                self.input.columns.dec,
                self.input.columns.brightness
            )));
        }

        if self.output.column_headers.is_empty() {
            return Err(SelectorError::configuration(
                "Output column headers cannot be empty",
            ));
        }

        Ok(())
    }

    /// Compiled file-header pattern.
    pub fn header_regex(&self) -> Result<Regex> {
        Regex::new(&self.input.header_pattern).map_err(|e| {
            SelectorError::configuration(format!(
                "Invalid header pattern '{}': {}",
                self.input.header_pattern, e
            ))
        })
    }

    /// Parsed ranking column.
    pub fn rank_column(&self) -> Result<RankColumn> {
        RankColumn::from_str(&self.output.order_by)
    }
}
