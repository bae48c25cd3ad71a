//! Configuration management and validation.
//!
//! Provides the configuration structure for default plate layout, user
//! defined channel hues and logging, loadable from TOML.

use crate::app::models::PlateFormat;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Log levels accepted by [`LoggingConfig::level`]
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Plate layout assumed when a file name does not name one
    pub default_plate_format: PlateFormat,

    /// User defined channel hues, keyed by channel name
    pub channel_hues: BTreeMap<String, f32>,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level for this crate's targets when `RUST_LOG` is unset
    pub level: String,

    /// Compact single-line output without timestamps
    pub compact: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact: false,
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            default_plate_format: PlateFormat::Wells384,
            channel_hues: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RecordsConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RecordsConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read configuration {}", path.display()), e)
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            "Loaded configuration from {} ({} channel hues)",
            path.display(),
            config.channel_hues.len()
        );
        Ok(config)
    }

    /// Check hue ranges and the log level
    pub fn validate(&self) -> Result<()> {
        for (channel, &hue) in &self.channel_hues {
            if !hue.is_finite() || !(0.0..1.0).contains(&hue) {
                return Err(Error::invalid_hue(channel.clone(), hue));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Set the default plate format
    pub fn with_default_plate_format(mut self, plate_format: PlateFormat) -> Self {
        self.default_plate_format = plate_format;
        self
    }

    /// Add a channel hue override
    pub fn with_channel_hue(mut self, channel: impl Into<String>, hue: f32) -> Self {
        self.channel_hues.insert(channel.into(), hue);
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Use compact log output
    pub fn with_compact_logging(mut self) -> Self {
        self.logging.compact = true;
        self
    }
}
