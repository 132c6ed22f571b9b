//! Control-number validation for catalog files.
//!
//! The catalog file header declares how many data rows the file carries as a
//! `declared/total` pair. This gate reads the whole file, counts the actual
//! data rows, and refuses to hand anything to the reader unless the numbers
//! agree. It is a correctness precondition, not an optimization, so the count
//! always runs to completion before the comparison.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::config::TrailingBlankPolicy;
use crate::constants::CONTROL_NUMBER_PATTERN;
use crate::error::{Result, SelectorError};

/// Validate the file-level control number before any row is processed.
///
/// Reads line 1 as the file header and counts the remaining physical lines.
/// A column-header line (when `has_column_headers` is set) is not a data row;
/// neither is a trailing blank line under the `Exclude` policy. The header
/// must match `header_pattern` and carry a `declared/total` pair whose first
/// integer equals the counted data rows. Succeeds with no return value; this
/// is a pure gate.
pub fn validate_control_number(
    path: &Path,
    header_pattern: &Regex,
    has_column_headers: bool,
    trailing_blank: TrailingBlankPolicy,
) -> Result<()> {
    if !path.exists() {
        return Err(SelectorError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let file_header = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };

    // Count all remaining lines before deciding anything. Track whether the
    // last physical line is blank so the trailing-blank policy can be applied.
    let mut counted = 0usize;
    let mut last_line_blank = false;
    for line in lines {
        let line = line?;
        last_line_blank = line.trim().is_empty();
        counted += 1;
    }

    if trailing_blank == TrailingBlankPolicy::Exclude && last_line_blank && counted > 0 {
        counted -= 1;
    }
    if has_column_headers && counted > 0 {
        counted -= 1;
    }

    if !header_pattern.is_match(&file_header) {
        return Err(SelectorError::HeaderFormat {
            path: path.to_path_buf(),
            pattern: header_pattern.as_str().to_string(),
        });
    }

    let control_re = Regex::new(CONTROL_NUMBER_PATTERN).expect("control number pattern is valid");
    let pair = control_re
        .find(&file_header)
        .ok_or_else(|| SelectorError::HeaderFormat {
            path: path.to_path_buf(),
            pattern: CONTROL_NUMBER_PATTERN.to_string(),
        })?
        .as_str();

    let declared: usize = pair
        .split('/')
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| SelectorError::HeaderFormat {
            path: path.to_path_buf(),
            pattern: CONTROL_NUMBER_PATTERN.to_string(),
        })?;

    debug!(
        "Control check for {}: declared={}, counted={}",
        path.display(),
        declared,
        counted
    );

    if declared != counted {
        return Err(SelectorError::ControlNumberMismatch { declared, counted });
    }

    info!("Control number verified: {} data rows", counted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn header_re() -> Regex {
        Regex::new(r"^CATALOG .*").unwrap()
    }

    #[test]
    fn test_matching_control_number_passes() {
        let file = write_file("CATALOG export 3/3\n1\ta\n2\tb\n3\tc\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_mismatched_control_number_fails() {
        let file = write_file("CATALOG export 5/5\n1\ta\n2\tb\n3\tc\n");
        let err = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        )
        .unwrap_err();
        match err {
            SelectorError::ControlNumberMismatch { declared, counted } => {
                assert_eq!(declared, 5);
                assert_eq!(counted, 3);
            }
            other => panic!("expected ControlNumberMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_fails() {
        let result = validate_control_number(
            Path::new("/nonexistent/catalog.tsv"),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(matches!(result, Err(SelectorError::MissingFile { .. })));
    }

    #[test]
    fn test_wrong_header_format_fails() {
        let file = write_file("EXPORT 3/3\n1\ta\n2\tb\n3\tc\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(matches!(result, Err(SelectorError::HeaderFormat { .. })));
    }

    #[test]
    fn test_header_without_control_pair_fails() {
        let file = write_file("CATALOG export\n1\ta\n2\tb\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(matches!(result, Err(SelectorError::HeaderFormat { .. })));
    }

    #[test]
    fn test_column_header_line_is_not_a_data_row() {
        let file = write_file("CATALOG export 2/2\nid\tname\n1\ta\n2\tb\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            true,
            TrailingBlankPolicy::Exclude,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_trailing_blank_excluded() {
        // Three data rows plus a trailing blank line: the blank is not a row.
        let file = write_file("CATALOG export 3/3\n1\ta\n2\tb\n3\tc\n\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_trailing_blank_counted() {
        // Under the counting convention the same file declares one row short.
        let file = write_file("CATALOG export 3/3\n1\ta\n2\tb\n3\tc\n\n");
        let err = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Count,
        )
        .unwrap_err();
        match err {
            SelectorError::ControlNumberMismatch { declared, counted } => {
                assert_eq!(declared, 3);
                assert_eq!(counted, 4);
            }
            other => panic!("expected ControlNumberMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_column_header_and_trailing_blank_both_subtracted() {
        let file = write_file("CATALOG export 2/2\nid\tname\n1\ta\n2\tb\n\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            true,
            TrailingBlankPolicy::Exclude,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_no_trailing_blank_under_both_policies() {
        let file = write_file("CATALOG export 2/2\n1\ta\n2\tb\n");
        assert!(validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude
        )
        .is_ok());
        assert!(validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Count
        )
        .is_ok());
    }

    #[test]
    fn test_first_control_pair_wins() {
        // Two pairs in the header: only the first is compared.
        let file = write_file("CATALOG 2/2 batch 9/9\n1\ta\n2\tb\n");
        let result = validate_control_number(
            file.path(),
            &header_re(),
            false,
            TrailingBlankPolicy::Exclude,
        );
        assert!(result.is_ok());
    }
}
