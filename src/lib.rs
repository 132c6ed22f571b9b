//! Field-of-view catalog selector library
//!
//! Selects, from a flat-file astronomical catalog, the objects that fall
//! inside a rectangular RA/Decl observation window and reports the N
//! brightest among them as a dated CSV file.
//!
//! This library provides tools for:
//! - Validating a file-level control number before any row is processed
//! - Parsing tab-delimited catalog records under a configurable column mapping
//! - Testing field-of-view membership and computing planar distance
//! - Partial top-N selection by an arbitrary numeric column
//! - Writing the ranked selection as comma-delimited text

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub mod catalog {
    pub mod control;
    pub mod reader;
}

pub mod pipeline {
    pub mod filter;
    pub mod selection;
    pub mod writer;
}

pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

pub use config::SelectorConfig;
pub use error::{Result, SelectorError};
pub use models::{CatalogRecord, FilteredRecord, ObservationParams, ObservationWindow, RankColumn};
