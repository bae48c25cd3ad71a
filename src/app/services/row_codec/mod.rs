//! Tab-separated record line codecs
//!
//! Each record kind has a fixed logical schema and is exchanged as one
//! line of tab separated fields with no quoting. Lines are split without
//! collapsing trailing empty fields.
//!
//! ## Architecture
//!
//! - [`dose_response`] - 14 column dose-response rows
//! - [`hcs`] - 9 fixed columns plus a variable tail of measurement values
//! - [`field_parsers`] - per-field coercion with default-or-propagate policy
//! - [`number_format`] - numeric text compatible with existing files
//!
//! ## Usage
//!
//! ```rust
//! use orbit_records::DoseResponseRow;
//! use orbit_records::app::services::row_codec::RowCodec;
//!
//! # fn example() -> orbit_records::Result<()> {
//! let line = "P1\tA01\tdose\tACT-1\tT1\t42\tcompound\t1\t0\t0.5\t1.0\tg\tIC50\t12.5";
//! let row = DoseResponseRow::parse(line)?;
//! assert_eq!(row.serialize(), line);
//! # Ok(())
//! # }
//! ```

pub mod dose_response;
pub mod field_parsers;
pub mod hcs;
pub mod number_format;

#[cfg(test)]
mod tests;

use crate::constants::FIELD_SEPARATOR;
use crate::{Error, Result};

/// A record kind with a fixed tab separated line format
pub trait RowCodec: Sized {
    /// Fewest fields a valid line may have
    const MIN_FIELDS: usize;

    /// Parse one line (without its line terminator)
    fn parse(line: &str) -> Result<Self>;

    /// Render the row as one line, without terminator or trailing separator
    fn serialize(&self) -> String;

    /// Name of the container (plate) the row belongs to
    fn container_name(&self) -> &str;
}

/// Split a line into fields, keeping trailing empty fields, and check that
/// at least `min_fields` are present
pub fn split_fields(line: &str, min_fields: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < min_fields {
        return Err(Error::format(
            line,
            format!(
                "Expected at least {} fields, found {}",
                min_fields,
                fields.len()
            ),
        ));
    }
    Ok(fields)
}

/// Join rendered fields with the field separator
pub(crate) fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(field.as_ref());
    }
    line
}
