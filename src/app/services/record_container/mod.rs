//! Record containers: ordered rows of one plate
//!
//! Rows stream in file order into a [`ContainerCollector`], which opens a
//! new container whenever the container name changes. Containers render
//! back to text as a header line followed by their rows.
//!
//! ## Architecture
//!
//! - [`container`] - [`RecordContainer`] trait and the two container kinds
//! - [`collector`] - grouping of contiguous rows into containers
//! - [`reader`] - dose-response and HCS file readers
//! - [`writer`] - writing a container to a file
//!
//! ## Usage
//!
//! ```rust
//! use orbit_records::{DoseResponseContainer, PlateFormat};
//! use orbit_records::app::services::record_container::RecordContainer;
//!
//! let container = DoseResponseContainer::new("PLATE-1", chrono::Utc::now(), PlateFormat::Wells96);
//! assert!(container.to_bytes().is_none());
//! assert_eq!(container.output_file_name(), "PLATE-1.dr96");
//! ```

pub mod collector;
pub mod container;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use collector::ContainerCollector;
pub use container::{DoseResponseContainer, HcsContainer, RecordContainer};
pub use reader::{DoseResponseReader, HcsReader};
pub use writer::save_container;
