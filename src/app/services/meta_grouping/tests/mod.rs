//! Tests for metadata grouping

use crate::app::models::meta::MetaValue;
use crate::app::services::meta_inference::MetaFactory;


pub fn metas(names: &[&str]) -> Vec<MetaValue> {
    let factory = MetaFactory::for_data(1);
    names
        .iter()
        .map(|name| factory.create_string(name, "v"))
        .collect()
}
