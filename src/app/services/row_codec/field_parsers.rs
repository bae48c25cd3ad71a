//! Field coercion for record lines
//!
//! Every numeric field goes through [`coerce`], which either substitutes a
//! default or propagates a format error when the text does not parse.

use super::number_format::parse_decimal;
use crate::constants::hcs::TIMESTAMP_FORMAT;
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset};
use std::fmt::Display;
use tracing::debug;

/// Numeric types that can be read from a record field
pub trait FieldValue: Sized + Copy + Display {
    /// Human readable type name for error messages
    const KIND: &'static str;

    fn parse_field(text: &str) -> Option<Self>;
}

impl FieldValue for i32 {
    const KIND: &'static str = "integer";

    fn parse_field(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FieldValue for f64 {
    const KIND: &'static str = "decimal";

    fn parse_field(text: &str) -> Option<Self> {
        parse_decimal(text)
    }
}

/// What to do when a field does not parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OnFailure<T> {
    /// Substitute the given value
    Default(T),
    /// Fail the whole line with a format error
    Propagate,
}

/// Parse one field of `line`, applying the failure policy
pub fn coerce<T: FieldValue>(
    text: &str,
    field_name: &str,
    line: &str,
    on_failure: OnFailure<T>,
) -> Result<T> {
    if let Some(value) = T::parse_field(text) {
        return Ok(value);
    }

    match on_failure {
        OnFailure::Default(value) => {
            debug!(
                "Invalid {} '{}' for {}, using default {}",
                T::KIND,
                text,
                field_name,
                value
            );
            Ok(value)
        }
        OnFailure::Propagate => Err(Error::format(
            line,
            format!("Invalid {} for {}: '{}'", T::KIND, field_name, text),
        )),
    }
}

/// Parse an optional measurement value; empty or unparsable text and NaN
/// are all treated as missing
pub fn parse_optional_value(text: &str) -> Option<f64> {
    parse_decimal(text).filter(|value| !value.is_nan())
}

/// Parse a required record timestamp (`dd.MM.yyyy HH:mm:ss,SSS Z`)
pub fn parse_timestamp(text: &str, line: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|e| {
        Error::format(
            line,
            format!("Invalid timestamp '{}' (expected 'dd.MM.yyyy HH:mm:ss,SSS Z'): {}", text, e),
        )
    })
}

/// Render a record timestamp with the offset it carries
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
