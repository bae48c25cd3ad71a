//! Type inference for raw metadata values

use crate::app::models::meta::MetaType;
use crate::app::services::row_codec::number_format::{format_double, parse_decimal};
use crate::constants::meta::{DATE_FORMAT, LONG_US_DATE_FORMAT};
use chrono::NaiveDate;

/// Infer the type of a raw value and return it with the value to store.
///
/// The trimmed value is tried, in order, as an integer, as a decimal with
/// `,` accepted as decimal separator, as a `dd.MM.yyyy` date and as a long
/// US date (`January 5, 2021`); slashes and dashes count as date dots.
/// Integers, decimals and dates are stored in canonical form, dates always
/// as `dd.MM.yyyy`. Anything else is a string stored exactly as given.
pub fn infer_value(raw: &str) -> (MetaType, String) {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');

    if let Ok(integer) = trimmed.parse::<i32>() {
        return (MetaType::Integer, integer.to_string());
    }

    if let Some(decimal) = parse_decimal(&trimmed.replace(',', ".")) {
        return (MetaType::Double, format_double(decimal));
    }

    if let Some(date) = parse_date(trimmed) {
        return (MetaType::Date, date.format(DATE_FORMAT).to_string());
    }

    (MetaType::String, raw.to_string())
}

/// Parse a date in either accepted pattern after normalizing separators
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let normalized = text.replace(['/', '-'], ".");

    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&normalized, LONG_US_DATE_FORMAT))
        .ok()
}
