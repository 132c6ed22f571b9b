//! Fixed patterns and default settings for the selector.

/// Pattern that extracts the `declared/total` control-number pair from a
/// file header line. The first match wins.
pub const CONTROL_NUMBER_PATTERN: &str = r"[0-9]+/[0-9]+";

/// Default file header pattern: any header carrying a control-number pair.
pub const DEFAULT_HEADER_PATTERN: &str = r".*[0-9]+/[0-9]+.*";

/// Default field delimiter for catalog input files.
pub const DEFAULT_DELIMITER: char = '\t';

/// Default timestamp pattern for output file names (chrono format syntax).
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y%m%d_%H%M%S";

/// Fixed attribute order of output rows.
pub const OUTPUT_FIELD_ORDER: [&str; 5] = ["ID", "RA", "DEC", "BRI", "DIST"];

/// Default column header names for the output file.
pub const DEFAULT_OUTPUT_HEADERS: [&str; 5] = ["ID", "RA", "DEC", "BRI", "DIST"];

/// Sentinel the interactive prompts accept to abort the run.
pub const ABORT_SENTINEL: &str = "q";
