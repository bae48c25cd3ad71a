//! Test fixtures for record containers

use crate::app::models::{CompoundType, DoseResponseRow, HcsRow, WellType};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

mod collector_tests;
mod reader_tests;

pub fn reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 5, 17, 9, 0, 0).unwrap()
}

pub fn create_dose_row(container: &str, well: &str, value: f64) -> DoseResponseRow {
    DoseResponseRow {
        container_name: container.to_string(),
        well_name: well.to_string(),
        well_type: WellType::Dose,
        compound_name: "ACT-1".to_string(),
        tube_id: "T1".to_string(),
        compound_id: 1,
        compound_type: CompoundType::Agonist,
        substance_no: 2,
        replicate_no: 0,
        concentration: 10.0,
        concentration_factor: 1.0,
        group: String::new(),
        measurement_name: "Inhibition".to_string(),
        measurement_value: value,
    }
}

pub fn create_hcs_row(container: &str, object_id: &str, values: Vec<Option<f64>>) -> HcsRow {
    HcsRow {
        container_name: container.to_string(),
        well_name: "C05".to_string(),
        site_x: 0,
        site_y: 1,
        site_z: 0.0,
        object_id: object_id.to_string(),
        object_x: 5,
        object_y: 6,
        timestamp: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2022, 5, 17, 9, 30, 0)
            .unwrap(),
        values,
    }
}
