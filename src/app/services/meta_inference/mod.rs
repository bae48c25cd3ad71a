//! Creation of metadata entries
//!
//! A [`MetaFactory`] stamps every entry it creates with the same owner,
//! user and modification date. Values can be created with an explicit type
//! or through [`MetaFactory::create_auto`], which infers the type from the
//! raw text.

pub mod inference;

#[cfg(test)]
mod tests;

use crate::app::models::meta::{MetaOwner, MetaType, MetaValue};
use crate::app::services::row_codec::number_format::format_double;
use crate::constants::meta::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

pub use inference::{infer_value, parse_date};

/// Factory for metadata entries attached to one owner
#[derive(Debug, Clone, PartialEq)]
pub struct MetaFactory {
    owner: MetaOwner,
    user_id: String,
    modify_date: Option<DateTime<Utc>>,
}

impl MetaFactory {
    /// Create a factory for entries of the given owner
    pub fn new(owner: MetaOwner) -> Self {
        Self {
            owner,
            user_id: String::new(),
            modify_date: None,
        }
    }

    /// Factory for entries attached to a data record
    pub fn for_data(data_id: i32) -> Self {
        Self::new(MetaOwner::Data(data_id))
    }

    /// Factory for entries attached to a data file record
    pub fn for_data_file(data_file_id: i32) -> Self {
        Self::new(MetaOwner::DataFile(data_file_id))
    }

    /// Attribute created entries to a user
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Stamp created entries with a modification date
    pub fn with_modify_date(mut self, modify_date: DateTime<Utc>) -> Self {
        self.modify_date = Some(modify_date);
        self
    }

    pub fn owner(&self) -> MetaOwner {
        self.owner
    }

    fn build(&self, name: &str, meta_type: MetaType, value: String) -> MetaValue {
        MetaValue {
            id: 0,
            owner: self.owner,
            meta_type,
            name: name.to_string(),
            value,
            user_id: self.user_id.clone(),
            modify_date: self.modify_date,
        }
    }

    pub fn create_string(&self, name: &str, value: &str) -> MetaValue {
        self.build(name, MetaType::String, value.to_string())
    }

    pub fn create_int(&self, name: &str, value: i32) -> MetaValue {
        self.build(name, MetaType::Integer, value.to_string())
    }

    pub fn create_double(&self, name: &str, value: f64) -> MetaValue {
        self.build(name, MetaType::Double, format_double(value))
    }

    /// Date entry stored as `dd.MM.yyyy`
    pub fn create_date(&self, name: &str, value: NaiveDate) -> MetaValue {
        self.build(name, MetaType::Date, value.format(DATE_FORMAT).to_string())
    }

    /// Create an entry, inferring its type from the raw text
    pub fn create_auto(&self, name: &str, raw_value: &str) -> MetaValue {
        let (meta_type, value) = infer_value(raw_value);
        debug!("Inferred {} for '{}' = '{}'", meta_type, name, raw_value);
        self.build(name, meta_type, value)
    }
}
