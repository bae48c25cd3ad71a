//! Fluorescence channel name to hue resolution
//!
//! A hue is a colour angle in `[0, 1)` used when composing multi-channel
//! images. Names are matched case-insensitively after trimming, through a
//! chain of increasingly loose rules that always ends in a hue.

pub mod tables;

#[cfg(test)]
mod tests;

use crate::config::RecordsConfig;
use crate::constants::hues;
use crate::{Error, Result};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::LazyLock;
use tables::{ALEXA_MARKERS, ALEXA_SUFFIXES, BUILTIN_ALIASES, COLOR_WORDS, DYE_TOKENS};
use tracing::{debug, warn};

static GLOBAL: LazyLock<ChannelHueResolver> = LazyLock::new(ChannelHueResolver::new);

fn first_contained(name: &str, table: &[(&str, f32)]) -> Option<f32> {
    table
        .iter()
        .find(|(token, _)| name.contains(token))
        .map(|&(_, hue)| hue)
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolves channel names to hues
///
/// User overrides live in a concurrent map and may be registered from any
/// thread while other threads resolve.
#[derive(Debug)]
pub struct ChannelHueResolver {
    aliases: HashMap<&'static str, f32>,
    /// Alias keys for the substring fallback, longest first then by name
    fallback_order: Vec<(&'static str, f32)>,
    overrides: DashMap<String, f32>,
}

impl Default for ChannelHueResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelHueResolver {
    /// Create a resolver with the built-in tables and no overrides
    pub fn new() -> Self {
        let aliases: HashMap<&'static str, f32> = BUILTIN_ALIASES.iter().copied().collect();

        let mut fallback_order: Vec<(&'static str, f32)> = BUILTIN_ALIASES.to_vec();
        fallback_order.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self {
            aliases,
            fallback_order,
            overrides: DashMap::new(),
        }
    }

    /// Process-wide resolver shared by all callers
    pub fn global() -> &'static ChannelHueResolver {
        &GLOBAL
    }

    /// Resolve a channel name to a hue; `None` yields the DAPI hue.
    ///
    /// Rules, first match wins: user override, built-in alias, short dye
    /// token, Alexa Fluor wavelength, colour word, then any built-in alias
    /// contained in the name. Unknown names log a warning and yield the
    /// DAPI hue.
    pub fn resolve(&self, channel: Option<&str>) -> f32 {
        let Some(channel) = channel else {
            return hues::DEFAULT;
        };
        let name = normalize(channel);

        if let Some(hue) = self.overrides.get(&name) {
            return *hue;
        }

        if let Some(&hue) = self.aliases.get(name.as_str()) {
            return hue;
        }

        if let Some(hue) = first_contained(&name, DYE_TOKENS) {
            return hue;
        }

        if ALEXA_MARKERS.iter().any(|marker| name.contains(marker)) {
            if let Some(hue) = first_contained(&name, ALEXA_SUFFIXES) {
                return hue;
            }
        }

        if let Some(hue) = first_contained(&name, COLOR_WORDS) {
            return hue;
        }

        if let Some(hue) = first_contained(&name, &self.fallback_order) {
            return hue;
        }

        warn!(
            "Unknown channel color, please define a hue for channel: {}",
            channel
        );
        hues::DEFAULT
    }

    /// Register a user hue for a channel name, replacing any previous one
    pub fn register(&self, channel: &str, hue: f32) -> Result<()> {
        if !hue.is_finite() || !(0.0..1.0).contains(&hue) {
            return Err(Error::invalid_hue(channel, hue));
        }

        let name = normalize(channel);
        debug!("Registering hue {} for channel '{}'", hue, name);
        self.overrides.insert(name, hue);
        Ok(())
    }

    /// Remove a user hue, returning it if one was registered
    pub fn unregister(&self, channel: &str) -> Option<f32> {
        self.overrides
            .remove(&normalize(channel))
            .map(|(_, hue)| hue)
    }

    /// Remove all user hues
    pub fn clear_overrides(&self) {
        self.overrides.clear();
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Register every channel hue of a configuration
    pub fn apply_config(&self, config: &RecordsConfig) -> Result<()> {
        for (channel, &hue) in &config.channel_hues {
            self.register(channel, hue)?;
        }
        debug!(
            "Applied {} configured channel hues",
            config.channel_hues.len()
        );
        Ok(())
    }
}
