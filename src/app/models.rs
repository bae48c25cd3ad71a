//! Data models for Orbit plate records
//!
//! This module contains the core data structures for dose-response and
//! high-content-screening (HCS) record rows, the plate layouts they refer
//! to, and the typed metadata entries in [`meta`].

pub mod meta;

use crate::constants::plate_formats;
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Compare two doubles the way record equality needs it: by value, with
/// every NaN equal to every other NaN and `0.0` distinct from `-0.0`.
pub(crate) fn same_double(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

// =============================================================================
// Plate Format
// =============================================================================

/// Well layout of a plate
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum PlateFormat {
    Wells96,
    #[default]
    Wells384,
    Wells1536,
}

impl PlateFormat {
    /// Layout string as written in files ("96", "384", "1536")
    pub fn as_str(self) -> &'static str {
        match self {
            PlateFormat::Wells96 => plate_formats::WELLS_96,
            PlateFormat::Wells384 => plate_formats::WELLS_384,
            PlateFormat::Wells1536 => plate_formats::WELLS_1536,
        }
    }

    /// Number of wells on the plate
    pub fn well_count(self) -> usize {
        match self {
            PlateFormat::Wells96 => 96,
            PlateFormat::Wells384 => 384,
            PlateFormat::Wells1536 => 1536,
        }
    }

    /// Find the layout named in a file extension such as `dr96` or `.dr384`.
    ///
    /// Matching is by substring, checking 1536 before 96.
    pub fn detect_in_extension(extension: &str) -> Option<Self> {
        if extension.contains(plate_formats::WELLS_1536) {
            Some(PlateFormat::Wells1536)
        } else if extension.contains(plate_formats::WELLS_96) {
            Some(PlateFormat::Wells96)
        } else if extension.contains(plate_formats::WELLS_384) {
            Some(PlateFormat::Wells384)
        } else {
            None
        }
    }

    /// Layout named in a file extension, 384 wells if it names none
    pub fn from_extension(extension: &str) -> Self {
        Self::detect_in_extension(extension).unwrap_or_default()
    }
}

impl FromStr for PlateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            plate_formats::WELLS_96 => Ok(PlateFormat::Wells96),
            plate_formats::WELLS_384 => Ok(PlateFormat::Wells384),
            plate_formats::WELLS_1536 => Ok(PlateFormat::Wells1536),
            _ => Err(Error::configuration(format!(
                "Invalid plate format '{}': must be 96, 384, or 1536",
                s
            ))),
        }
    }
}

impl TryFrom<String> for PlateFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PlateFormat> for String {
    fn from(format: PlateFormat) -> Self {
        format.as_str().to_string()
    }
}

impl std::fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Well and Compound Types
// =============================================================================

/// Role of a well in a dose-response experiment
///
/// Text that is not one of the known tokens is kept verbatim in `Other` so
/// that rows written by newer or older tools survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WellType {
    /// Negative control (0% effect)
    P0,
    /// Positive control (100% effect)
    P100,
    Dose,
    DoseAndP0,
    DoseAndP100,
    Other(String),
}

impl WellType {
    pub fn as_str(&self) -> &str {
        match self {
            WellType::P0 => "p0",
            WellType::P100 => "p100",
            WellType::Dose => "dose",
            WellType::DoseAndP0 => "doseAndP0",
            WellType::DoseAndP100 => "doseAndP100",
            WellType::Other(text) => text,
        }
    }

    /// Whether the well carries a compound dose
    pub fn has_dose(&self) -> bool {
        matches!(
            self,
            WellType::Dose | WellType::DoseAndP0 | WellType::DoseAndP100
        )
    }
}

impl From<&str> for WellType {
    fn from(s: &str) -> Self {
        match s {
            "p0" => WellType::P0,
            "p100" => WellType::P100,
            "dose" => WellType::Dose,
            "doseAndP0" => WellType::DoseAndP0,
            "doseAndP100" => WellType::DoseAndP100,
            other => WellType::Other(other.to_string()),
        }
    }
}

impl From<String> for WellType {
    fn from(s: String) -> Self {
        WellType::from(s.as_str())
    }
}

impl From<WellType> for String {
    fn from(well_type: WellType) -> Self {
        well_type.as_str().to_string()
    }
}

impl std::fmt::Display for WellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pharmacological role of the compound in a well
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompoundType {
    Compound,
    Agonist,
    Antagonist,
    Other(String),
}

impl CompoundType {
    pub fn as_str(&self) -> &str {
        match self {
            CompoundType::Compound => "compound",
            CompoundType::Agonist => "agonist",
            CompoundType::Antagonist => "antagonist",
            CompoundType::Other(text) => text,
        }
    }
}

impl From<&str> for CompoundType {
    fn from(s: &str) -> Self {
        match s {
            "compound" => CompoundType::Compound,
            "agonist" => CompoundType::Agonist,
            "antagonist" => CompoundType::Antagonist,
            other => CompoundType::Other(other.to_string()),
        }
    }
}

impl From<String> for CompoundType {
    fn from(s: String) -> Self {
        CompoundType::from(s.as_str())
    }
}

impl From<CompoundType> for String {
    fn from(compound_type: CompoundType) -> Self {
        compound_type.as_str().to_string()
    }
}

impl std::fmt::Display for CompoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Dose-Response Row
// =============================================================================

/// One measurement of one compound dose in one well
///
/// No text field may contain the tab separator; this is not checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoseResponseRow {
    /// Plate name shared by all rows of a container
    pub container_name: String,
    pub well_name: String,
    pub well_type: WellType,
    pub compound_name: String,
    pub tube_id: String,
    pub compound_id: i32,
    pub compound_type: CompoundType,
    /// Substance number, -1 if unknown
    pub substance_no: i32,
    pub replicate_no: i32,
    pub concentration: f64,
    pub concentration_factor: f64,
    pub group: String,
    pub measurement_name: String,
    /// Measured value, NaN if missing
    pub measurement_value: f64,
}

impl Default for DoseResponseRow {
    fn default() -> Self {
        use crate::constants::dose_response::*;

        Self {
            container_name: String::new(),
            well_name: String::new(),
            well_type: WellType::Other(String::new()),
            compound_name: String::new(),
            tube_id: String::new(),
            compound_id: DEFAULT_COMPOUND_ID,
            compound_type: CompoundType::Other(String::new()),
            substance_no: DEFAULT_SUBSTANCE_NO,
            replicate_no: DEFAULT_REPLICATE_NO,
            concentration: DEFAULT_CONCENTRATION,
            concentration_factor: DEFAULT_CONCENTRATION_FACTOR,
            group: String::new(),
            measurement_name: String::new(),
            measurement_value: DEFAULT_MEASUREMENT_VALUE,
        }
    }
}

impl DoseResponseRow {
    /// Whether a measurement value is present
    pub fn has_measurement(&self) -> bool {
        !self.measurement_value.is_nan()
    }

    /// Order by (container, well, well type, compound type, group,
    /// measurement name), each compared lexicographically.
    pub fn cmp_by_key(&self, other: &Self) -> Ordering {
        self.container_name
            .cmp(&other.container_name)
            .then_with(|| self.well_name.cmp(&other.well_name))
            .then_with(|| self.well_type.as_str().cmp(other.well_type.as_str()))
            .then_with(|| self.compound_type.as_str().cmp(other.compound_type.as_str()))
            .then_with(|| self.group.cmp(&other.group))
            .then_with(|| self.measurement_name.cmp(&other.measurement_name))
    }
}

impl PartialEq for DoseResponseRow {
    fn eq(&self, other: &Self) -> bool {
        self.container_name == other.container_name
            && self.well_name == other.well_name
            && self.well_type == other.well_type
            && self.compound_name == other.compound_name
            && self.tube_id == other.tube_id
            && self.compound_id == other.compound_id
            && self.compound_type == other.compound_type
            && self.substance_no == other.substance_no
            && self.replicate_no == other.replicate_no
            && same_double(self.concentration, other.concentration)
            && same_double(self.concentration_factor, other.concentration_factor)
            && self.group == other.group
            && self.measurement_name == other.measurement_name
            && same_double(self.measurement_value, other.measurement_value)
    }
}

impl Eq for DoseResponseRow {}

// =============================================================================
// HCS Row
// =============================================================================

/// Per-object measurements of one imaging site
///
/// `values` holds the variable-length measurement tail; `None` marks a
/// missing value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HcsRow {
    pub container_name: String,
    pub well_name: String,
    pub site_x: i32,
    pub site_y: i32,
    pub site_z: f64,
    pub object_id: String,
    pub object_x: i32,
    pub object_y: i32,
    /// Acquisition time, keeping the offset it was written with
    pub timestamp: DateTime<FixedOffset>,
    pub values: Vec<Option<f64>>,
}

impl HcsRow {
    /// Number of measurement values present (not missing)
    pub fn present_value_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Order by (container, well, site x/y/z, object id, object x/y, time).
    ///
    /// Integer coordinates compare numerically without overflow and `site_z`
    /// uses the IEEE total order, so the result is a total order suitable
    /// for sorting.
    pub fn cmp_by_key(&self, other: &Self) -> Ordering {
        self.container_name
            .cmp(&other.container_name)
            .then_with(|| self.well_name.cmp(&other.well_name))
            .then_with(|| self.site_x.cmp(&other.site_x))
            .then_with(|| self.site_y.cmp(&other.site_y))
            .then_with(|| self.site_z.total_cmp(&other.site_z))
            .then_with(|| self.object_id.cmp(&other.object_id))
            .then_with(|| self.object_x.cmp(&other.object_x))
            .then_with(|| self.object_y.cmp(&other.object_y))
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

impl PartialEq for HcsRow {
    fn eq(&self, other: &Self) -> bool {
        self.container_name == other.container_name
            && self.well_name == other.well_name
            && self.site_x == other.site_x
            && self.site_y == other.site_y
            && same_double(self.site_z, other.site_z)
            && self.object_id == other.object_id
            && self.object_x == other.object_x
            && self.object_y == other.object_y
            && self.timestamp == other.timestamp
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| match (a, b) {
                    (Some(a), Some(b)) => same_double(*a, *b),
                    (None, None) => true,
                    _ => false,
                })
    }
}

impl Eq for HcsRow {}
