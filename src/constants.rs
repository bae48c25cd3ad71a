//! Application constants for Orbit records
//!
//! This module contains the wire format constants, metadata naming rules
//! and channel hue values used throughout the library.

// =============================================================================
// Record Line Formats
// =============================================================================

/// Field separator shared by all record line formats
pub const FIELD_SEPARATOR: char = '\t';

/// Plate layout strings as written in container metadata and file extensions
pub mod plate_formats {
    pub const WELLS_96: &str = "96";
    pub const WELLS_384: &str = "384";
    pub const WELLS_1536: &str = "1536";
}

/// Dose-response line format
pub mod dose_response {
    /// Header line written in front of every dose-response container.
    ///
    /// The header lists 13 titles while rows carry 14 fields (there is no
    /// `Group` title); existing consumers expect exactly this line.
    pub const HEADER: &str = "ContainerName\tWellName\tWellType\tCompoundName\tTubeId\tCompoundId\tCompoundType\tSubstanceNo\tReplicateNo\tConcentration\tConcentrationFactor\tMeasurementName\tMeasurementValue";

    /// Number of titles in [`HEADER`]
    pub const HEADER_COLUMNS: usize = 13;

    /// Minimum number of fields in a dose-response row
    pub const MIN_FIELDS: usize = 14;

    /// Marker used to find the header line in a dose-response file
    pub const HEADER_MARKER: &str = "ContainerName";

    /// File extension prefix, followed by the plate format (`.dr384`)
    pub const FILE_EXTENSION_PREFIX: &str = "dr";

    // Defaults substituted when optional fields fail to parse
    pub const DEFAULT_COMPOUND_ID: i32 = 0;
    pub const DEFAULT_SUBSTANCE_NO: i32 = -1;
    pub const DEFAULT_REPLICATE_NO: i32 = 0;
    pub const DEFAULT_CONCENTRATION: f64 = 1.0;
    pub const DEFAULT_CONCENTRATION_FACTOR: f64 = 0.0;
    pub const DEFAULT_MEASUREMENT_VALUE: f64 = f64::NAN;
}

/// High-content-screening line format
pub mod hcs {
    /// Fixed leading columns of every HCS row
    pub const BASE_COLUMNS: &[&str] = &[
        "ContainerName",
        "WellName",
        "SiteX",
        "SiteY",
        "SiteZ",
        "ObjectId",
        "ObjectX",
        "ObjectY",
        "Time",
    ];

    /// Minimum number of fields in an HCS row
    pub const MIN_FIELDS: usize = 9;

    /// Timestamp pattern (`dd.MM.yyyy HH:mm:ss,SSS Z`)
    pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S,%3f %z";
}

// =============================================================================
// Metadata Constants
// =============================================================================

/// Metadata naming and grouping rules
pub mod meta {
    /// Bucket for entries whose cleaned name has no dotted prefix
    pub const GENERAL_GROUP: &str = "General";

    /// Always sorted first within a bucket
    pub const ORBIT_ID: &str = "Orbit ID";

    /// Always sorted second to last within a bucket
    pub const REFERENCE_DATE: &str = "Reference Date";

    /// Always sorted last within a bucket
    pub const MODIFY_DATE: &str = "Modify Date";

    /// Canonical date pattern for DATE values (`dd.MM.yyyy`)
    pub const DATE_FORMAT: &str = "%d.%m.%Y";

    /// Long-form US date pattern (`MMMM d, yyyy`), accepted on input only
    pub const LONG_US_DATE_FORMAT: &str = "%B %d, %Y";

    /// Noisy technical keys that are never shown, matched on the cleaned name
    pub const DENYLIST: &[&str] = &[
        "Flipr.File",
        "Flipr.Read Plate name",
        "Flipr.Export In",
        "Flipr.Read Plate Barcode",
        "Flipr.Source Plate 1 Barcode",
        "Flipr.Source Plate 2 Barcode",
        "Flipr.Source Plate 3 Barcode",
        "Flipr.Source Plate 1 name",
        "Flipr.Source Plate 2 name",
        "Flipr.Source Plate 3 name",
        "PhotometricInterpretation",
        "StripOffsets",
        "BitsPerSample",
        "PlanarConfiguration",
    ];
}

// =============================================================================
// Channel Hues
// =============================================================================

/// Hue values (fraction of a full colour circle) for common stains
pub mod hues {
    pub const ALEXA_388: f32 = 102.0 / 360.0;
    pub const ALEXA_568: f32 = 0.0 / 360.0;
    pub const ALEXA_594: f32 = 0.0 / 360.0;
    pub const AMCA: f32 = 204.0 / 360.0;
    pub const CY3: f32 = 40.0 / 360.0;
    pub const CY5: f32 = 0.0 / 360.0;
    pub const CY7: f32 = 62.0 / 360.0;
    pub const DAPI: f32 = 240.0 / 360.0;
    pub const EGFP: f32 = 141.0 / 360.0;
    pub const FITC: f32 = 108.0 / 360.0;
    pub const PERCP: f32 = 0.0 / 360.0;
    pub const TRITC: f32 = 22.0 / 360.0;

    // Generic colour words
    pub const VIOLET: f32 = 264.0 / 360.0;
    pub const RED: f32 = 0.0 / 360.0;
    pub const GREEN: f32 = 102.0 / 360.0;
    pub const BLUE: f32 = 231.0 / 360.0;

    /// Hue used for missing or unknown channel names
    pub const DEFAULT: f32 = DAPI;
}
