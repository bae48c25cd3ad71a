//! Grouping of metadata entries for hierarchical display
//!
//! Entry names follow a dotted convention (`Camera.Gain`). Entries are
//! bucketed by the part before the first dot of their grouping name (see
//! [`MetaValue::clean_name_special`]), the prefix is removed from the stored
//! name, and buckets and entries are sorted by fixed precedence rules.

pub mod comparators;

#[cfg(test)]
mod tests;

use crate::app::models::meta::MetaValue;
use crate::constants::meta::{DENYLIST, GENERAL_GROUP};
use comparators::{compare_entries, compare_group_names};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error};

/// A named bucket of metadata entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaGroup {
    pub name: String,
    pub entries: Vec<MetaValue>,
}

impl MetaGroup {
    pub fn is_general(&self) -> bool {
        self.name == GENERAL_GROUP
    }

    /// Entry with the given (de-prefixed) name
    pub fn entry(&self, name: &str) -> Option<&MetaValue> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Group key of a grouping name: the text before the first dot, provided
/// something other than dots follows it
fn group_key(clean_name: &str) -> Option<&str> {
    let (prefix, rest) = clean_name.split_once('.')?;
    if rest.chars().all(|c| c == '.') {
        None
    } else {
        Some(prefix)
    }
}

/// Removes `<prefix><any char>` from stored names; the character after the
/// prefix is matched loosely so `Microscope_Stand` loses `Microscope_`
struct PrefixStripper {
    patterns: HashMap<String, Option<Regex>>,
}

impl PrefixStripper {
    fn new() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    fn strip(&mut self, name: &str, prefix: &str) -> String {
        let pattern = self
            .patterns
            .entry(prefix.to_string())
            .or_insert_with(|| {
                let source = format!("{}.", regex::escape(prefix));
                match Regex::new(&source) {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        error!("Error changing meta name prefix '{}': {}", prefix, e);
                        None
                    }
                }
            });

        match pattern {
            Some(regex) => regex.replace_all(name, "").into_owned(),
            None => name.to_string(),
        }
    }
}

/// Partition metadata entries into sorted, named groups.
///
/// Entries on the denylist are dropped. Every occurrence of the group
/// prefix is removed from the stored name of grouped entries. The general
/// group comes first, other groups follow by name; within a group
/// `Orbit ID` leads and `Reference Date`, `Modify Date` close the list.
pub fn group_metas<I>(metas: I) -> Vec<MetaGroup>
where
    I: IntoIterator<Item = MetaValue>,
{
    let mut buckets: HashMap<String, Vec<MetaValue>> = HashMap::new();
    let mut stripper = PrefixStripper::new();

    for mut meta in metas {
        let clean_name = meta.clean_name_special();
        if DENYLIST.contains(&clean_name.as_str()) {
            debug!("Skipping denylisted meta entry '{}'", clean_name);
            continue;
        }

        let key = match group_key(&clean_name) {
            Some(prefix) => {
                meta.name = stripper.strip(&meta.name, prefix);
                prefix.to_string()
            }
            None => GENERAL_GROUP.to_string(),
        };

        buckets.entry(key).or_default().push(meta);
    }

    let mut groups: Vec<MetaGroup> = buckets
        .into_iter()
        .map(|(name, mut entries)| {
            entries.sort_by(compare_entries);
            MetaGroup { name, entries }
        })
        .collect();
    groups.sort_by(|a, b| compare_group_names(&a.name, &b.name));

    debug!("Grouped meta entries into {} groups", groups.len());
    groups
}
