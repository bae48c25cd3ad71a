//! File readers and writer

use super::{create_dose_row, reference_date};
use crate::app::models::PlateFormat;
use crate::app::services::record_container::{
    DoseResponseContainer, DoseResponseReader, HcsReader, RecordContainer, save_container,
};
use crate::config::RecordsConfig;
use crate::constants::dose_response::HEADER;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn dose_file_content() -> String {
    let row = |container: &str, well: &str| {
        format!(
            "{}\t{}\tp0\tACT-1\tT1\t7\tcompound\t1\t0\t1.0\t0.0\t\tIC50\t0.25",
            container, well
        )
    };
    format!(
        "exported by plate reader\n\n{}\n{}\n{}\n\n{}\n",
        HEADER,
        row("P1", "A01"),
        row("P1", "A02"),
        row("P2", "A01")
    )
}

#[test]
fn test_dose_reader_skips_preamble_and_blank_lines() {
    let containers = DoseResponseReader::new()
        .read(
            Cursor::new(dose_file_content()),
            reference_date(),
            PlateFormat::Wells96,
        )
        .unwrap();

    assert_eq!(containers.len(), 2);
    assert_eq!(containers[0].container_name, "P1");
    assert_eq!(containers[0].len(), 2);
    assert_eq!(containers[0].plate_format, PlateFormat::Wells96);
    assert_eq!(containers[0].reference_date, reference_date());
    assert_eq!(containers[1].rows[0].compound_id, 7);
}

#[test]
fn test_dose_reader_without_header_fails() {
    let result = DoseResponseReader::new().read(
        Cursor::new("no header here\n"),
        reference_date(),
        PlateFormat::Wells384,
    );
    assert!(result.unwrap_err().is_format_error());
}

#[test]
fn test_dose_reader_propagates_invalid_rows() {
    let content = format!("{}\nP1\tA01\n", HEADER);
    let result = DoseResponseReader::new().read(
        Cursor::new(content),
        reference_date(),
        PlateFormat::Wells384,
    );
    assert!(result.unwrap_err().is_format_error());
}

#[test]
fn test_plate_format_from_file_name() {
    let reader = DoseResponseReader::new();
    assert_eq!(
        reader.plate_format_for(Path::new("plate.dr96")),
        PlateFormat::Wells96
    );
    assert_eq!(
        reader.plate_format_for(Path::new("plate.DR1536")),
        PlateFormat::Wells1536
    );
    assert_eq!(
        reader.plate_format_for(Path::new("plate.txt")),
        PlateFormat::Wells384
    );

    let configured = DoseResponseReader::from_config(
        &RecordsConfig::default().with_default_plate_format(PlateFormat::Wells96),
    );
    assert_eq!(
        configured.plate_format_for(Path::new("plate.txt")),
        PlateFormat::Wells96
    );
    assert_eq!(
        configured.plate_format_for(Path::new("plate.dr384")),
        PlateFormat::Wells384
    );
}

#[test]
fn test_read_file_and_accepts_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("screen.dr96");
    std::fs::write(&path, dose_file_content()).unwrap();

    assert!(DoseResponseReader::accepts_file(&path));
    assert!(!DoseResponseReader::accepts_file(&dir.path().join("missing.dr96")));

    let other = dir.path().join("notes.txt");
    std::fs::write(&other, "x").unwrap();
    assert!(!DoseResponseReader::accepts_file(&other));

    let containers = DoseResponseReader::new().read_file(&path).unwrap();
    assert_eq!(containers.len(), 2);
    assert_eq!(containers[0].plate_format, PlateFormat::Wells96);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let result = DoseResponseReader::new().read_file(Path::new("/nonexistent/plate.dr384"));
    assert!(matches!(result, Err(crate::Error::Io { .. })));
}

#[test]
fn test_hcs_reader() {
    let content = "\nContainerName\tWellName\tSiteX\tSiteY\tSiteZ\tObjectId\tObjectX\tObjectY\tTime\tArea\n\
                   H1\tA01\t0\t0\t0.0\to1\t1\t2\t01.01.2021 00:00:00,000 +0000\t5.5\n\
                   H1\tA01\t0\t0\t0.0\to2\t3\t4\t01.01.2021 00:00:01,000 +0000\t\n\
                   H2\tA01\t0\t0\t0.0\to1\t1\t2\t01.01.2021 00:00:02,000 +0000\t7\n";

    let containers = HcsReader::new()
        .read(Cursor::new(content), reference_date())
        .unwrap();

    assert_eq!(containers.len(), 2);
    assert_eq!(containers[0].len(), 2);
    assert_eq!(containers[0].rows[1].values, vec![None]);
    assert_eq!(containers[1].value_names(), ["Area".to_string()]);
    assert_eq!(containers[1].header, containers[0].header);
}

#[test]
fn test_hcs_reader_short_header_fails() {
    let result = HcsReader::new().read(Cursor::new("ContainerName\tWellName\n"), reference_date());
    assert!(result.unwrap_err().is_format_error());
}

#[test]
fn test_hcs_reader_empty_input() {
    let containers = HcsReader::new()
        .read(Cursor::new("\n\n"), reference_date())
        .unwrap();
    assert!(containers.is_empty());
}

#[test]
fn test_save_container_round_trip() {
    let dir = TempDir::new().unwrap();
    let container = DoseResponseContainer::new("P1", reference_date(), PlateFormat::Wells384)
        .with_rows(vec![
            create_dose_row("P1", "A01", 1.25),
            create_dose_row("P1", "A02", f64::NAN),
        ]);
    let path = dir.path().join(container.output_file_name());

    assert!(save_container(&path, &container).unwrap());

    let read_back = DoseResponseReader::new()
        .read(
            std::io::BufReader::new(std::fs::File::open(&path).unwrap()),
            reference_date(),
            PlateFormat::Wells384,
        )
        .unwrap();
    assert_eq!(read_back, vec![container]);
}

#[test]
fn test_save_empty_container_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.dr384");
    let container = DoseResponseContainer::new("empty", reference_date(), PlateFormat::Wells384);

    assert!(!save_container(&path, &container).unwrap());
    assert!(!path.exists());
}
