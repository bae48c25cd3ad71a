//! Fixed precedence orderings for entries and groups

use crate::app::models::meta::MetaValue;
use crate::constants::meta::{GENERAL_GROUP, MODIFY_DATE, ORBIT_ID, REFERENCE_DATE};
use std::cmp::Ordering;

/// Position class of an entry name within its group
fn entry_rank(name: &str) -> u8 {
    match name {
        ORBIT_ID => 0,
        REFERENCE_DATE => 2,
        MODIFY_DATE => 3,
        _ => 1,
    }
}

/// `Orbit ID` first, then names in lexicographic order, then
/// `Reference Date`, then `Modify Date`
pub fn compare_entries(a: &MetaValue, b: &MetaValue) -> Ordering {
    entry_rank(&a.name)
        .cmp(&entry_rank(&b.name))
        .then_with(|| a.name.cmp(&b.name))
}

/// The general group first, then lexicographic by group name
pub fn compare_group_names(a: &str, b: &str) -> Ordering {
    match (a == GENERAL_GROUP, b == GENERAL_GROUP) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::meta::{MetaOwner, MetaType};

    fn named(name: &str) -> MetaValue {
        MetaValue {
            id: 0,
            owner: MetaOwner::Data(1),
            meta_type: MetaType::String,
            name: name.to_string(),
            value: String::new(),
            user_id: String::new(),
            modify_date: None,
        }
    }

    #[test]
    fn test_entry_precedence() {
        let mut entries: Vec<MetaValue> = [
            "Modify Date",
            "Zoom",
            "Reference Date",
            "Alpha",
            "Orbit ID",
        ]
        .iter()
        .map(|name| named(name))
        .collect();

        entries.sort_by(compare_entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Orbit ID", "Alpha", "Zoom", "Reference Date", "Modify Date"]
        );
    }

    #[test]
    fn test_entry_comparison_is_antisymmetric() {
        let orbit = named("Orbit ID");
        let modify = named("Modify Date");
        assert_eq!(compare_entries(&orbit, &modify), Ordering::Less);
        assert_eq!(compare_entries(&modify, &orbit), Ordering::Greater);
        assert_eq!(compare_entries(&orbit, &orbit), Ordering::Equal);
    }

    #[test]
    fn test_group_name_order() {
        assert_eq!(compare_group_names("General", "Alpha"), Ordering::Less);
        assert_eq!(compare_group_names("Alpha", "General"), Ordering::Greater);
        assert_eq!(compare_group_names("General", "General"), Ordering::Equal);
        assert_eq!(compare_group_names("Camera", "Alpha"), Ordering::Greater);
    }
}
