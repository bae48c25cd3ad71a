//! Dose-response row codec

use super::field_parsers::{OnFailure, coerce};
use super::number_format::format_double;
use super::{RowCodec, join_fields, split_fields};
use crate::Result;
use crate::app::models::{CompoundType, DoseResponseRow, WellType};
use crate::constants::dose_response::*;
use std::str::FromStr;

impl RowCodec for DoseResponseRow {
    const MIN_FIELDS: usize = MIN_FIELDS;

    /// Parse a dose-response line.
    ///
    /// Compound id, substance number, replicate number and measurement value
    /// fall back to their defaults when unparsable. Concentration and
    /// concentration factor are required.
    fn parse(line: &str) -> Result<Self> {
        let fields = split_fields(line, MIN_FIELDS)?;

        let compound_id = coerce(
            fields[5],
            "CompoundId",
            line,
            OnFailure::Default(DEFAULT_COMPOUND_ID),
        )?;
        let substance_no = coerce(
            fields[7],
            "SubstanceNo",
            line,
            OnFailure::Default(DEFAULT_SUBSTANCE_NO),
        )?;
        let replicate_no = coerce(
            fields[8],
            "ReplicateNo",
            line,
            OnFailure::Default(DEFAULT_REPLICATE_NO),
        )?;
        let concentration = coerce(fields[9], "Concentration", line, OnFailure::Propagate)?;
        let concentration_factor =
            coerce(fields[10], "ConcentrationFactor", line, OnFailure::Propagate)?;
        let measurement_value = coerce(
            fields[13],
            "MeasurementValue",
            line,
            OnFailure::Default(DEFAULT_MEASUREMENT_VALUE),
        )?;

        Ok(DoseResponseRow {
            container_name: fields[0].to_string(),
            well_name: fields[1].to_string(),
            well_type: WellType::from(fields[2]),
            compound_name: fields[3].to_string(),
            tube_id: fields[4].to_string(),
            compound_id,
            compound_type: CompoundType::from(fields[6]),
            substance_no,
            replicate_no,
            concentration,
            concentration_factor,
            group: fields[11].to_string(),
            measurement_name: fields[12].to_string(),
            measurement_value,
        })
    }

    fn serialize(&self) -> String {
        join_fields([
            self.container_name.clone(),
            self.well_name.clone(),
            self.well_type.to_string(),
            self.compound_name.clone(),
            self.tube_id.clone(),
            self.compound_id.to_string(),
            self.compound_type.to_string(),
            self.substance_no.to_string(),
            self.replicate_no.to_string(),
            format_double(self.concentration),
            format_double(self.concentration_factor),
            self.group.clone(),
            self.measurement_name.clone(),
            format_double(self.measurement_value),
        ])
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }
}

impl FromStr for DoseResponseRow {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DoseResponseRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
