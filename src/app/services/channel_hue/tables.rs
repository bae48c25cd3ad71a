//! Built-in channel hue tables
//!
//! All keys are lower case.

use crate::constants::hues::*;

/// Exact channel names and aliases
pub const BUILTIN_ALIASES: &[(&str, f32)] = &[
    ("alexa594", ALEXA_594),
    ("alexa fluor 594", ALEXA_594),
    ("alexa388", ALEXA_388),
    ("alexa fluor 388", ALEXA_388),
    ("alexa568", ALEXA_568),
    ("alexa fluor 568", ALEXA_568),
    ("cy2", FITC),
    ("cy3", CY3),
    ("cy3.5", CY3),
    ("cy3_5", CY3),
    ("cy5", CY5),
    ("cy5.5", CY5),
    ("cy5_5", CY5),
    ("cy5 2 (650)", CY5),
    ("cy7", CY7),
    ("egfp", EGFP),
    ("gfp", EGFP),
    ("dapi", DAPI),
    ("dapi 2 (387)", DAPI),
    ("fitc", FITC),
    ("fitc 2 (485)", FITC),
    ("tritc", TRITC),
    ("tritc 2 (560)", TRITC),
    ("amca", AMCA),
    ("coumarin", AMCA),
    ("channel0", DAPI),
    ("channel1", FITC),
    ("channel2", TRITC),
    ("channel3", CY5),
    ("channel4", EGFP),
    ("channel5", CY3),
    ("hoechst", DAPI),
    ("percp", PERCP),
];

/// Short dye tokens checked by substring, first match wins
pub const DYE_TOKENS: &[(&str, f32)] = &[
    ("dapi", DAPI),
    ("fitc", FITC),
    ("tritc", TRITC),
    ("cy5", CY5),
    ("cy3", CY3),
    ("gfp", EGFP),
];

/// Markers of an Alexa Fluor dye name
pub const ALEXA_MARKERS: &[&str] = &["alexa", "af"];

/// Alexa Fluor wavelength suffixes in ascending order
pub const ALEXA_SUFFIXES: &[(&str, f32)] = &[
    ("350", 204.0 / 360.0),
    ("388", ALEXA_388),
    ("405", 204.0 / 360.0),
    ("430", 135.0 / 360.0),
    ("488", 135.0 / 360.0),
    ("532", 48.0 / 360.0),
    ("546", 36.0 / 360.0),
    ("568", 12.0 / 360.0),
    ("594", 12.0 / 360.0),
    ("610", 12.0 / 360.0),
    ("633", 12.0 / 360.0),
    ("635", 12.0 / 360.0),
    // infrared
    ("647", 62.0 / 360.0),
    ("660", 62.0 / 360.0),
    ("680", 62.0 / 360.0),
    ("700", 62.0 / 360.0),
    ("750", 62.0 / 360.0),
    ("790", 62.0 / 360.0),
];

/// Generic colour words checked by substring, first match wins
pub const COLOR_WORDS: &[(&str, f32)] = &[
    ("violet", VIOLET),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
];
