//! Streaming container assembly

use super::{create_dose_row, create_hcs_row, reference_date};
use crate::app::models::PlateFormat;
use crate::app::services::record_container::{
    ContainerCollector, DoseResponseContainer, HcsContainer, RecordContainer,
};

fn dose_collector() -> ContainerCollector<DoseResponseContainer, impl FnMut(&str) -> DoseResponseContainer>
{
    ContainerCollector::new(|name: &str| {
        DoseResponseContainer::new(name, reference_date(), PlateFormat::Wells384)
    })
}

#[test]
fn test_contiguous_rows_share_a_container() {
    let mut collector = dose_collector();
    collector.append_row(create_dose_row("P1", "A01", 1.0));
    collector.append_row(create_dose_row("P1", "A02", 2.0));
    collector.append_row(create_dose_row("P2", "A01", 3.0));
    assert_eq!(collector.containers().len(), 2);

    let containers = collector.finish();
    assert_eq!(containers[0].container_name, "P1");
    assert_eq!(containers[0].len(), 2);
    assert_eq!(containers[0].rows[1].well_name, "A02");
    assert_eq!(containers[1].container_name, "P2");
    assert_eq!(containers[1].len(), 1);
}

#[test]
fn test_discontiguous_names_open_separate_containers() {
    let mut collector = dose_collector();
    for name in ["P1", "P2", "P1"] {
        collector.append_row(create_dose_row(name, "A01", 1.0));
    }

    let names: Vec<String> = collector
        .finish()
        .into_iter()
        .map(|c| c.container_name)
        .collect();
    assert_eq!(names, ["P1", "P2", "P1"]);
}

#[test]
fn test_no_rows_no_containers() {
    assert!(dose_collector().finish().is_empty());
}

#[test]
fn test_hcs_collector_uses_factory_header() {
    let header = HcsContainer::header_with_values(&["Area"]);
    let mut collector =
        ContainerCollector::new(|name: &str| HcsContainer::new(name, reference_date(), header.clone()));

    collector.append_row(create_hcs_row("H1", "o1", vec![Some(1.0)]));
    collector.append_row(create_hcs_row("H2", "o1", vec![Some(2.0)]));

    let containers = collector.finish();
    assert_eq!(containers.len(), 2);
    assert!(containers.iter().all(|c| c.value_names() == ["Area".to_string()]));
}
