//! Container types holding the rows of one plate

use crate::app::models::{DoseResponseRow, HcsRow, PlateFormat};
use crate::app::services::row_codec::{RowCodec, join_fields};
use crate::constants::{dose_response, hcs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An ordered sequence of rows sharing one container identity
pub trait RecordContainer {
    type Row: RowCodec;

    fn container_name(&self) -> &str;

    fn rows(&self) -> &[Self::Row];

    /// Append a row at the end; rows are never reordered
    fn push_row(&mut self, row: Self::Row);

    /// Header line without terminator, `None` if the container has none
    fn header_line(&self) -> Option<String>;

    fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    fn len(&self) -> usize {
        self.rows().len()
    }

    /// Header followed by one line per row, every line newline-terminated
    fn render(&self) -> String {
        let mut text = String::new();
        if let Some(header) = self.header_line() {
            text.push_str(&header);
            text.push('\n');
        }
        for row in self.rows() {
            text.push_str(&row.serialize());
            text.push('\n');
        }
        text
    }

    /// UTF-8 bytes of [`render`](Self::render), or `None` when there are no
    /// rows so that callers never write a header-only file
    fn to_bytes(&self) -> Option<Vec<u8>> {
        if self.is_empty() {
            None
        } else {
            Some(self.render().into_bytes())
        }
    }
}

// =============================================================================
// Dose-Response Container
// =============================================================================

/// One plate of dose-response rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseResponseContainer {
    pub container_name: String,
    /// Creation or capture time of the plate
    pub reference_date: DateTime<Utc>,
    pub plate_format: PlateFormat,
    pub rows: Vec<DoseResponseRow>,
}

impl DoseResponseContainer {
    /// Create an empty container
    pub fn new(
        container_name: impl Into<String>,
        reference_date: DateTime<Utc>,
        plate_format: PlateFormat,
    ) -> Self {
        Self {
            container_name: container_name.into(),
            reference_date,
            plate_format,
            rows: Vec::new(),
        }
    }

    /// Replace the rows
    pub fn with_rows(mut self, rows: Vec<DoseResponseRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Order by (name, reference date, plate format), ignoring rows.
    ///
    /// Plate formats compare by their text, so "1536" < "384" < "96".
    pub fn cmp_by_identity(&self, other: &Self) -> Ordering {
        self.container_name
            .cmp(&other.container_name)
            .then_with(|| self.reference_date.cmp(&other.reference_date))
            .then_with(|| self.plate_format.as_str().cmp(other.plate_format.as_str()))
    }

    /// File name the container is exported under (`<name>.dr<format>`)
    pub fn output_file_name(&self) -> String {
        format!(
            "{}.{}{}",
            self.container_name,
            dose_response::FILE_EXTENSION_PREFIX,
            self.plate_format
        )
    }
}

impl RecordContainer for DoseResponseContainer {
    type Row = DoseResponseRow;

    fn container_name(&self) -> &str {
        &self.container_name
    }

    fn rows(&self) -> &[DoseResponseRow] {
        &self.rows
    }

    fn push_row(&mut self, row: DoseResponseRow) {
        self.rows.push(row);
    }

    fn header_line(&self) -> Option<String> {
        Some(dose_response::HEADER.to_string())
    }
}

impl std::fmt::Display for DoseResponseContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DoseResponseContainer [name={}, referenceDate={}, plateFormat={}, rows={}]",
            self.container_name,
            self.reference_date.to_rfc3339(),
            self.plate_format,
            self.rows.len()
        )
    }
}

// =============================================================================
// HCS Container
// =============================================================================

/// One plate of HCS rows with its column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HcsContainer {
    pub container_name: String,
    pub reference_date: DateTime<Utc>,
    /// Column names: the 9 base columns followed by the value names
    pub header: Vec<String>,
    pub rows: Vec<HcsRow>,
    /// Free-text plate layout, empty if unknown
    pub plate_format: String,
    pub plate_batch: i32,
    pub concentration: String,
    pub pipeline_name: String,
}

impl HcsContainer {
    /// Create an empty container with the given column header
    pub fn new(
        container_name: impl Into<String>,
        reference_date: DateTime<Utc>,
        header: Vec<String>,
    ) -> Self {
        Self {
            container_name: container_name.into(),
            reference_date,
            header,
            rows: Vec::new(),
            plate_format: String::new(),
            plate_batch: 0,
            concentration: String::new(),
            pipeline_name: String::new(),
        }
    }

    /// Header made of the base columns followed by `value_names`
    pub fn header_with_values<S: AsRef<str>>(value_names: &[S]) -> Vec<String> {
        hcs::BASE_COLUMNS
            .iter()
            .map(|name| name.to_string())
            .chain(value_names.iter().map(|name| name.as_ref().to_string()))
            .collect()
    }

    pub fn with_rows(mut self, rows: Vec<HcsRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_plate_format(mut self, plate_format: impl Into<String>) -> Self {
        self.plate_format = plate_format.into();
        self
    }

    pub fn with_plate_batch(mut self, plate_batch: i32) -> Self {
        self.plate_batch = plate_batch;
        self
    }

    pub fn with_concentration(mut self, concentration: impl Into<String>) -> Self {
        self.concentration = concentration.into();
        self
    }

    pub fn with_pipeline_name(mut self, pipeline_name: impl Into<String>) -> Self {
        self.pipeline_name = pipeline_name.into();
        self
    }

    /// Measurement column names (the header after the base columns)
    pub fn value_names(&self) -> &[String] {
        self.header.get(hcs::BASE_COLUMNS.len()..).unwrap_or(&[])
    }
}

impl RecordContainer for HcsContainer {
    type Row = HcsRow;

    fn container_name(&self) -> &str {
        &self.container_name
    }

    fn rows(&self) -> &[HcsRow] {
        &self.rows
    }

    fn push_row(&mut self, row: HcsRow) {
        self.rows.push(row);
    }

    fn header_line(&self) -> Option<String> {
        if self.header.is_empty() {
            None
        } else {
            Some(join_fields(&self.header))
        }
    }
}

impl std::fmt::Display for HcsContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HcsContainer [name={}, referenceDate={}, rows={}, plateFormat={}, plateBatch={}]",
            self.container_name,
            self.reference_date.to_rfc3339(),
            self.rows.len(),
            self.plate_format,
            self.plate_batch
        )
    }
}
