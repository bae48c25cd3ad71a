//! Readers turning record files into containers

use super::collector::ContainerCollector;
use super::container::{DoseResponseContainer, HcsContainer};
use crate::app::models::{DoseResponseRow, HcsRow, PlateFormat};
use crate::app::services::row_codec::{RowCodec, split_fields};
use crate::config::RecordsConfig;
use crate::constants::{dose_response, hcs};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Modification time of a file, used as the reference date of its containers
fn modification_date(path: &Path) -> Result<DateTime<Utc>> {
    let modified = std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| {
            Error::io(
                format!("Failed to read modification time of {}", path.display()),
                e,
            )
        })?;
    Ok(DateTime::<Utc>::from(modified))
}

fn open_buffered(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    Ok(BufReader::new(file))
}

fn read_error(e: std::io::Error) -> Error {
    Error::io("Failed to read record line", e)
}

// =============================================================================
// Dose-Response Reader
// =============================================================================

/// Reader for dose-response files (`.dr384`, `.dr96`, `.dr1536`)
#[derive(Debug, Clone, Default)]
pub struct DoseResponseReader {
    default_plate_format: PlateFormat,
}

impl DoseResponseReader {
    /// Create a reader assuming 384 well plates for unnamed layouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader using the configured default plate format
    pub fn from_config(config: &RecordsConfig) -> Self {
        Self {
            default_plate_format: config.default_plate_format,
        }
    }

    /// Plate format named by the file extension, or the default
    pub fn plate_format_for(&self, path: &Path) -> PlateFormat {
        path.extension()
            .map(|extension| extension.to_string_lossy().to_lowercase())
            .and_then(|extension| PlateFormat::detect_in_extension(&extension))
            .unwrap_or(self.default_plate_format)
    }

    /// Whether the path is an existing dose-response file
    pub fn accepts_file(path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        [
            PlateFormat::Wells96,
            PlateFormat::Wells384,
            PlateFormat::Wells1536,
        ]
        .iter()
        .any(|format| {
            name.ends_with(&format!(
                ".{}{}",
                dose_response::FILE_EXTENSION_PREFIX,
                format
            ))
        })
    }

    /// Read all containers of a file, dated with its modification time
    pub fn read_file(&self, path: &Path) -> Result<Vec<DoseResponseContainer>> {
        info!("Reading dose-response file: {}", path.display());

        let reference_date = modification_date(path)?;
        let plate_format = self.plate_format_for(path);
        let containers = self.read(open_buffered(path)?, reference_date, plate_format)?;

        info!(
            "Read {} containers from {}",
            containers.len(),
            path.display()
        );
        Ok(containers)
    }

    /// Read containers from a stream.
    ///
    /// Lines before the header line (the first containing `ContainerName`)
    /// are skipped, as are blank lines after it. Every other line must be a
    /// valid dose-response row.
    pub fn read<R: BufRead>(
        &self,
        reader: R,
        reference_date: DateTime<Utc>,
        plate_format: PlateFormat,
    ) -> Result<Vec<DoseResponseContainer>> {
        let mut lines = reader.lines();

        let mut skipped = 0usize;
        loop {
            match lines.next() {
                Some(line) => {
                    if line.map_err(read_error)?.contains(dose_response::HEADER_MARKER) {
                        break;
                    }
                    skipped += 1;
                }
                None => {
                    return Err(Error::format(
                        "",
                        format!(
                            "No header line containing '{}' found",
                            dose_response::HEADER_MARKER
                        ),
                    ));
                }
            }
        }
        debug!("Skipped {} lines before the header", skipped);

        let mut collector = ContainerCollector::new(|name: &str| {
            DoseResponseContainer::new(name, reference_date, plate_format)
        });
        for line in lines {
            let line = line.map_err(read_error)?;
            if line.trim().is_empty() {
                continue;
            }
            collector.append_row(DoseResponseRow::parse(&line)?);
        }

        Ok(collector.finish())
    }
}

// =============================================================================
// HCS Reader
// =============================================================================

/// Reader for HCS files: one header line followed by rows
#[derive(Debug, Clone, Default)]
pub struct HcsReader;

impl HcsReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all containers of a file, dated with its modification time
    pub fn read_file(&self, path: &Path) -> Result<Vec<HcsContainer>> {
        info!("Reading HCS file: {}", path.display());

        let reference_date = modification_date(path)?;
        let containers = self.read(open_buffered(path)?, reference_date)?;

        info!(
            "Read {} containers from {}",
            containers.len(),
            path.display()
        );
        Ok(containers)
    }

    /// Read containers from a stream.
    ///
    /// The first non-blank line is the column header and must name at
    /// least the 9 base columns; every container receives it. Blank lines
    /// are skipped. Input without a header yields no containers.
    pub fn read<R: BufRead>(
        &self,
        reader: R,
        reference_date: DateTime<Utc>,
    ) -> Result<Vec<HcsContainer>> {
        let mut lines = reader.lines();

        let header: Vec<String> = loop {
            match lines.next() {
                Some(line) => {
                    let line = line.map_err(read_error)?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    break split_fields(&line, hcs::MIN_FIELDS)?
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                }
                None => return Ok(Vec::new()),
            }
        };
        debug!(
            "HCS header has {} value columns",
            header.len() - hcs::MIN_FIELDS
        );

        let mut collector = ContainerCollector::new(|name: &str| {
            HcsContainer::new(name, reference_date, header.clone())
        });
        for line in lines {
            let line = line.map_err(read_error)?;
            if line.trim().is_empty() {
                continue;
            }
            collector.append_row(HcsRow::parse(&line)?);
        }

        Ok(collector.finish())
    }
}
