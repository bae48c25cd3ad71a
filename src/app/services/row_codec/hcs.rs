//! HCS row codec

use super::field_parsers::{
    OnFailure, coerce, format_timestamp, parse_optional_value, parse_timestamp,
};
use super::number_format::format_double;
use super::{RowCodec, join_fields, split_fields};
use crate::Result;
use crate::app::models::HcsRow;
use crate::constants::hcs::MIN_FIELDS;
use std::str::FromStr;

impl RowCodec for HcsRow {
    const MIN_FIELDS: usize = MIN_FIELDS;

    /// Parse an HCS line.
    ///
    /// The fixed columns and the timestamp are required. Each value after
    /// the ninth column is read independently and becomes `None` when empty
    /// or unparsable.
    fn parse(line: &str) -> Result<Self> {
        let fields = split_fields(line, MIN_FIELDS)?;

        let site_x = coerce(fields[2], "SiteX", line, OnFailure::Propagate)?;
        let site_y = coerce(fields[3], "SiteY", line, OnFailure::Propagate)?;
        let site_z = coerce(fields[4], "SiteZ", line, OnFailure::Propagate)?;
        let object_x = coerce(fields[6], "ObjectX", line, OnFailure::Propagate)?;
        let object_y = coerce(fields[7], "ObjectY", line, OnFailure::Propagate)?;
        let timestamp = parse_timestamp(fields[8], line)?;

        let values = fields[MIN_FIELDS..]
            .iter()
            .map(|text| parse_optional_value(text))
            .collect();

        Ok(HcsRow {
            container_name: fields[0].to_string(),
            well_name: fields[1].to_string(),
            site_x,
            site_y,
            site_z,
            object_id: fields[5].to_string(),
            object_x,
            object_y,
            timestamp,
            values,
        })
    }

    fn serialize(&self) -> String {
        let fixed = [
            self.container_name.clone(),
            self.well_name.clone(),
            self.site_x.to_string(),
            self.site_y.to_string(),
            format_double(self.site_z),
            self.object_id.clone(),
            self.object_x.to_string(),
            self.object_y.to_string(),
            format_timestamp(&self.timestamp),
        ];

        // Missing values (and NaN) are written as empty fields
        let values = self.values.iter().map(|value| match value {
            Some(v) if !v.is_nan() => format_double(*v),
            _ => String::new(),
        });

        join_fields(fixed.into_iter().chain(values))
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }
}

impl FromStr for HcsRow {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for HcsRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
