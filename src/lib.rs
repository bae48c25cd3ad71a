//! Orbit Records Library
//!
//! Line-oriented interchange formats and metadata handling for plate based
//! screening data produced by the Orbit image analysis platform.
//!
//! This library provides tools for:
//! - Parsing and writing tab-separated dose-response and HCS record lines
//! - Collecting rows into per-plate containers and rendering them back to text
//! - Creating typed metadata entries with automatic type inference
//! - Grouping metadata entries into ordered, named buckets for display
//! - Resolving fluorescence channel names to rendering hues

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod channel_hue;
        pub mod meta_grouping;
        pub mod meta_inference;
        pub mod record_container;
        pub mod row_codec;
    }
}

// Re-export commonly used types
pub use app::models::meta::{MetaOwner, MetaType, MetaValue};
pub use app::models::{CompoundType, DoseResponseRow, HcsRow, PlateFormat, WellType};
pub use app::services::channel_hue::ChannelHueResolver;
pub use app::services::meta_grouping::{MetaGroup, group_metas};
pub use app::services::meta_inference::MetaFactory;
pub use app::services::record_container::{DoseResponseContainer, HcsContainer};
pub use config::RecordsConfig;

/// Result type alias for record and metadata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for record parsing, configuration and lookups
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid record line
    #[error("Format error: {message} (line: '{line}')")]
    Format { line: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Metadata name pattern could not be compiled
    #[error("Invalid name pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Hue outside of [0, 1)
    #[error("Invalid hue {hue} for channel '{channel}': must be in [0, 1)")]
    InvalidHue { channel: String, hue: f32 },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error for the offending line
    pub fn format(line: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid hue error
    pub fn invalid_hue(channel: impl Into<String>, hue: f32) -> Self {
        Self::InvalidHue {
            channel: channel.into(),
            hue,
        }
    }

    /// Whether this error describes a structurally invalid record line
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {}", error),
        }
    }
}
