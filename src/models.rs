//! Core data structures for the selection pipeline.
//!
//! Records and windows exist only for the duration of one run; the pipeline
//! is a single-pass batch, with no persistence between runs except the final
//! output file.

use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;

/// One raw catalog line, addressable by zero-based field position.
///
/// Fields are produced by splitting on a single delimiter character with no
/// quoting or escaping support. A blank input line becomes a record holding
/// a single empty field.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub fields: Vec<String>,
}

impl CatalogRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or `None` when the line has fewer columns.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }
}

/// Observation parameters collected from the user: window center, field of
/// view, and the number of objects to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationParams {
    /// Right ascension of the window center, degrees.
    pub ra: f64,
    /// Declination of the window center, degrees.
    pub dec: f64,
    /// Field-of-view width, degrees.
    pub fov_h: f64,
    /// Field-of-view height, degrees.
    pub fov_v: f64,
    /// Number of objects to select.
    pub top_n: usize,
}

/// Rectangular observation window derived from center and field of view.
///
/// The window test is planar: no great-circle correction and no wraparound
/// at the 0°/360° boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationWindow {
    pub min_ra: f64,
    pub max_ra: f64,
    pub min_dec: f64,
    pub max_dec: f64,
}

impl ObservationWindow {
    /// Derive window bounds from the observation center and field of view.
    pub fn from_center(ra: f64, dec: f64, fov_h: f64, fov_v: f64) -> Self {
        Self {
            min_ra: ra - fov_h / 2.0,
            max_ra: ra + fov_h / 2.0,
            min_dec: dec - fov_v / 2.0,
            max_dec: dec + fov_v / 2.0,
        }
    }

    /// Membership test, inclusive on all four edges.
    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        self.min_ra <= ra && ra <= self.max_ra && self.min_dec <= dec && dec <= self.max_dec
    }
}

/// A catalog record that passed the window test, augmented with its planar
/// distance from the observation center.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRecord {
    pub id: i64,
    pub ra: f64,
    pub dec: f64,
    pub brightness: f64,
    pub distance: f64,
}

impl FilteredRecord {
    /// Value of the given ranking column for this record.
    pub fn rank_value(&self, column: RankColumn) -> f64 {
        match column {
            RankColumn::Id => self.id as f64,
            RankColumn::Ra => self.ra,
            RankColumn::Dec => self.dec,
            RankColumn::Brightness => self.brightness,
            RankColumn::Distance => self.distance,
        }
    }

    /// Attribute values in the fixed output order ID, RA, DEC, BRI, DIST.
    pub fn output_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.ra.to_string(),
            self.dec.to_string(),
            self.brightness.to_string(),
            self.distance.to_string(),
        ]
    }
}

/// The attribute a top-N selection is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankColumn {
    Id,
    Ra,
    Dec,
    Brightness,
    Distance,
}

impl RankColumn {
    pub const NAMES: [&'static str; 5] = ["ID", "RA", "DEC", "BRI", "DIST"];
}

impl fmt::Display for RankColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankColumn::Id => "ID",
            RankColumn::Ra => "RA",
            RankColumn::Dec => "DEC",
            RankColumn::Brightness => "BRI",
            RankColumn::Distance => "DIST",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RankColumn {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ID" => Ok(RankColumn::Id),
            "RA" => Ok(RankColumn::Ra),
            "DEC" => Ok(RankColumn::Dec),
            "BRI" => Ok(RankColumn::Brightness),
            "DIST" => Ok(RankColumn::Distance),
            other => Err(SelectorError::configuration(format!(
                "Unknown ranking column '{}'. Available columns: {}",
                other,
                RankColumn::NAMES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_from_center() {
        let window = ObservationWindow::from_center(180.0, 0.0, 10.0, 4.0);
        assert_eq!(window.min_ra, 175.0);
        assert_eq!(window.max_ra, 185.0);
        assert_eq!(window.min_dec, -2.0);
        assert_eq!(window.max_dec, 2.0);
    }

    #[test]
    fn test_window_membership_is_edge_inclusive() {
        let window = ObservationWindow::from_center(180.0, 0.0, 10.0, 4.0);

        // All four edges match exactly
        assert!(window.contains(175.0, 0.0));
        assert!(window.contains(185.0, 0.0));
        assert!(window.contains(180.0, -2.0));
        assert!(window.contains(180.0, 2.0));

        // Just outside
        assert!(!window.contains(174.999, 0.0));
        assert!(!window.contains(185.001, 0.0));
        assert!(!window.contains(180.0, -2.001));
        assert!(!window.contains(180.0, 2.001));
    }

    #[test]
    fn test_rank_column_parsing() {
        assert_eq!("BRI".parse::<RankColumn>().unwrap(), RankColumn::Brightness);
        assert_eq!("dist".parse::<RankColumn>().unwrap(), RankColumn::Distance);
        assert_eq!(" id ".parse::<RankColumn>().unwrap(), RankColumn::Id);
        assert!("MAG".parse::<RankColumn>().is_err());
    }

    #[test]
    fn test_rank_value_accessor() {
        let record = FilteredRecord {
            id: 42,
            ra: 180.5,
            dec: -1.25,
            brightness: 5.6,
            distance: 0.75,
        };
        assert_eq!(record.rank_value(RankColumn::Id), 42.0);
        assert_eq!(record.rank_value(RankColumn::Brightness), 5.6);
        assert_eq!(record.rank_value(RankColumn::Distance), 0.75);
    }
}
