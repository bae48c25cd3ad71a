//! Typed metadata entries
//!
//! A [`MetaValue`] is a named attribute attached either to a data record or
//! to a data file record. Values are stored as text together with a type tag
//! that decides how they are displayed.

use crate::app::services::row_codec::number_format::{format_fixed_half_up, parse_decimal};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Storage type of a metadata value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaType {
    String,
    Integer,
    Double,
    Date,
}

impl std::fmt::Display for MetaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MetaType::String => "STRING",
            MetaType::Integer => "INTEGER",
            MetaType::Double => "DOUBLE",
            MetaType::Date => "DATE",
        };
        f.write_str(name)
    }
}

/// Record a metadata entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaOwner {
    /// Attached to a data record (by its id)
    Data(i32),
    /// Attached to a data file record (by its id)
    DataFile(i32),
}

/// A named, typed metadata entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaValue {
    /// Persistence id, 0 until stored
    pub id: i32,
    pub owner: MetaOwner,
    pub meta_type: MetaType,
    /// Raw name as delivered by the source (may contain underscores)
    pub name: String,
    pub value: String,
    /// User the entry is attributed to
    pub user_id: String,
    pub modify_date: Option<DateTime<Utc>>,
}

impl MetaValue {
    /// Id of the owning data record, if attached to one
    pub fn data_id(&self) -> Option<i32> {
        match self.owner {
            MetaOwner::Data(id) => Some(id),
            MetaOwner::DataFile(_) => None,
        }
    }

    /// Id of the owning data file record, if attached to one
    pub fn data_file_id(&self) -> Option<i32> {
        match self.owner {
            MetaOwner::DataFile(id) => Some(id),
            MetaOwner::Data(_) => None,
        }
    }

    /// Whether the entry has been assigned a persistence id
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Name with underscores replaced by spaces
    pub fn clean_name(&self) -> String {
        self.name.replace('_', " ")
    }

    /// Cleaned name rewritten for hierarchical grouping.
    ///
    /// `Microscope ` becomes `Microscope.` so microscope settings form their
    /// own group, and `Image.` is removed so image properties land in the
    /// general group. The stored name is not changed.
    pub fn clean_name_special(&self) -> String {
        self.clean_name()
            .replace("Microscope ", "Microscope.")
            .replace("Image.", "")
    }

    /// Value formatted for display.
    ///
    /// Integers are shown as stored. Anything else that reads as a decimal
    /// number is rounded to two fraction digits, dropping a `.00` tail; all
    /// other values are shown unchanged.
    pub fn formatted_value(&self) -> String {
        if self.meta_type == MetaType::Integer {
            return self.value.clone();
        }

        match parse_decimal(&self.value) {
            Some(number) => {
                let formatted = format_fixed_half_up(number, 2);
                match formatted
                    .strip_suffix(".00")
                    .or_else(|| formatted.strip_suffix(",00"))
                {
                    Some(trimmed) => trimmed.to_string(),
                    None => formatted,
                }
            }
            None => self.value.clone(),
        }
    }
}

impl std::fmt::Display for MetaValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name:{} | Value:{} | Type:{} | Owner:{:?}",
            self.name, self.value, self.meta_type, self.owner
        )
    }
}

/// Find an entry by its exact stored name
pub fn find_by_name<'a>(metas: &'a [MetaValue], name: &str) -> Option<&'a MetaValue> {
    metas.iter().find(|meta| meta.name == name)
}

/// All entries whose whole name matches a regular expression
pub fn find_all_matching<'a>(metas: &'a [MetaValue], pattern: &str) -> Result<Vec<&'a MetaValue>> {
    let regex = Regex::new(&format!("^(?:{})$", pattern))
        .map_err(|e| Error::invalid_pattern(pattern, e))?;

    Ok(metas
        .iter()
        .filter(|meta| regex.is_match(&meta.name))
        .collect())
}

/// First entry whose whole name matches a regular expression
pub fn find_any_matching<'a>(
    metas: &'a [MetaValue],
    pattern: &str,
) -> Result<Option<&'a MetaValue>> {
    Ok(find_all_matching(metas, pattern)?.into_iter().next())
}
