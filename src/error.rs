//! Error handling for catalog selection operations.
//!
//! All pipeline errors are fatal: they propagate to the top level and abort
//! the run with no partial output written. Interactive prompt retries are a
//! local recoverable loop and never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing input file: {path}")]
    MissingFile { path: PathBuf },

    #[error("Wrong file header format in {path}: header line does not match pattern '{pattern}'")]
    HeaderFormat { path: PathBuf, pattern: String },

    #[error("Control numbers don't match: header declares {declared} records, file contains {counted}")]
    ControlNumberMismatch { declared: usize, counted: usize },

    #[error("Missing value in column {column} at data row {row}")]
    MissingValue { row: usize, column: usize },

    #[error("Cannot parse {field} value '{value}' at data row {row}")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl SelectorError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
