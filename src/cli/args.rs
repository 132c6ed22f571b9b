//! Command-line argument definitions.
//!
//! Observation parameters can be supplied as flags for non-interactive use;
//! any parameter left out is collected through the interactive prompts.

use std::path::PathBuf;

use clap::Parser;

use crate::cli::input;
use crate::error::{Result, SelectorError};

/// CLI arguments for the field-of-view catalog selector
///
/// Selects the objects of a flat-file astronomical catalog that fall inside
/// a rectangular RA/Decl observation window and reports the N brightest
/// among them as a dated CSV file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fov-selector",
    version,
    about = "Select the brightest catalog objects inside an RA/Decl observation window"
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    ///
    /// If not specified, built-in defaults are used: tab-delimited
    /// `catalog.tsv` with file and column headers, output into ./output.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Right ascension of the observation center, degrees (0-360 exclusive)
    #[arg(long = "ra", value_name = "DEG")]
    pub ra: Option<f64>,

    /// Declination of the observation center, degrees (-90 to 90)
    #[arg(long = "dec", value_name = "DEG")]
    pub dec: Option<f64>,

    /// Field-of-view width, degrees (0-360 exclusive)
    #[arg(long = "fov-width", value_name = "DEG")]
    pub fov_width: Option<f64>,

    /// Field-of-view height, degrees (-90 to 90)
    #[arg(long = "fov-height", value_name = "DEG")]
    pub fov_height: Option<f64>,

    /// Number of objects to report
    #[arg(short = 'n', long = "top", value_name = "COUNT")]
    pub top_n: Option<usize>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Validate explicitly supplied observation flags against the same
    /// ranges the interactive prompts enforce.
    pub fn validate(&self) -> Result<()> {
        if let Some(ra) = self.ra {
            if !input::valid_ra(ra) {
                return Err(SelectorError::configuration(format!(
                    "RA must be in (0, 360) exclusive, got {}",
                    ra
                )));
            }
        }

        if let Some(dec) = self.dec {
            if !input::valid_dec(dec) {
                return Err(SelectorError::configuration(format!(
                    "Decl must be in [-90, 90], got {}",
                    dec
                )));
            }
        }

        if let Some(fov_width) = self.fov_width {
            if !input::valid_fov_h(fov_width) {
                return Err(SelectorError::configuration(format!(
                    "Field-of-view width must be in (0, 360) exclusive, got {}",
                    fov_width
                )));
            }
        }

        if let Some(fov_height) = self.fov_height {
            if !input::valid_fov_v(fov_height) {
                return Err(SelectorError::configuration(format!(
                    "Field-of-view height must be in [-90, 90], got {}",
                    fov_height
                )));
            }
        }

        if self.top_n == Some(0) {
            return Err(SelectorError::configuration(
                "Top-N count must be a positive integer",
            ));
        }

        Ok(())
    }

    /// All five observation parameters supplied as flags?
    pub fn has_all_params(&self) -> bool {
        self.ra.is_some()
            && self.dec.is_some()
            && self.fov_width.is_some()
            && self.fov_height.is_some()
            && self.top_n.is_some()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            config_file: None,
            ra: None,
            dec: None,
            fov_width: None,
            fov_height: None,
            top_n: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_empty_args_validate() {
        assert!(base_args().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_flags_rejected() {
        let mut args = base_args();
        args.ra = Some(360.0);
        assert!(args.validate().is_err());

        let mut args = base_args();
        args.dec = Some(-90.5);
        assert!(args.validate().is_err());

        let mut args = base_args();
        args.fov_width = Some(0.0);
        assert!(args.validate().is_err());

        let mut args = base_args();
        args.top_n = Some(0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_has_all_params() {
        let mut args = base_args();
        assert!(!args.has_all_params());

        args.ra = Some(180.0);
        args.dec = Some(0.0);
        args.fov_width = Some(10.0);
        args.fov_height = Some(5.0);
        assert!(!args.has_all_params());

        args.top_n = Some(3);
        assert!(args.has_all_params());
    }

    #[test]
    fn test_log_level() {
        let mut args = base_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
