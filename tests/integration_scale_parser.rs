//! Integration tests for the scale export parser
//!
//! These tests exercise the public parsing surface end-to-end against
//! fixture exports written to disk, covering both unit systems and the
//! fail-fast error paths.

use std::io::Write;

use chrono::NaiveDate;
use scale2fit::{Error, ScaleCsvParser};
use tempfile::NamedTempFile;

const METRIC_EXPORT: &str = "\
Time,Family Members,WEIGHT (kg),BMI,BODY FAT %,HEART RATE (bpm),MUSCLE MASS (kg),MUSCLE MASS %,BMR,WATER,BODY FAT MASS (kg),LEAN BODY MASS (kg),BONE MASS (kg),BONE MASS %,VISCERAL FAT,PROTEIN %,SKELETAL MUSCLE MASS (kg),SUBCUTANEOUS FAT %,BODY AGE,BODY TYPE,HEAD SIZE (cm)
2025-01-17 18:47:20,Alice,93.35,17.8,19.5,54,45.4,48.9,1572,50.6,12.9,50.44,3,4.6,24,18.3,36.6,36.8,23,Average,0
2025-01-18 08:54:08,Alice,33.2,37.7,10.5,60,32.4,28.9,1571,30.6,32.8,70.4,3,2.6,44,21.5,27.5,12.7,73,Average,0
";

const IMPERIAL_EXPORT: &str = "\
Time,Family Members,WEIGHT (lbs),BMI,BODY FAT %,HEART RATE (bpm),MUSCLE MASS (lbs),MUSCLE MASS %,BMR,WATER,BODY FAT MASS (lbs),LEAN BODY MASS (lbs),BONE MASS (lbs),BONE MASS %,VISCERAL FAT,PROTEIN %,SKELETAL MUSCLE MASS (lbs),SUBCUTANEOUS FAT %,BODY AGE,BODY TYPE
2025-05-01 11:06:55,Bob,79.01,27.1,26.3,97,35.44,70.0,1541,50.4,6.95,2.49,1.61,3.7,14,15.5,33.32,22.7,23,Average
2025-04-29 05:38:45,Bob,81.21,27.4,27.0,77,35.88,69.4,1556,50.0,8.72,12.49,6.61,3.6,18,15.3,17.51,23.2,73,Average
";

fn write_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create fixture file");
    file.write_all(content.as_bytes())
        .expect("Failed to write fixture");
    file.flush().expect("Failed to flush fixture");
    file
}

#[test]
fn test_parse_metric_export_from_disk() {
    let fixture = write_fixture(METRIC_EXPORT);
    let parser = ScaleCsvParser::new();

    let result = parser.parse_file(fixture.path()).expect("parse failed");
    assert_eq!(result.records.len(), 2);
    assert!(!result.stats.is_imperial());

    let first = &result.records[0];
    assert_eq!(
        first.timestamp,
        NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(18, 47, 20)
            .unwrap()
    );
    // Metric values are stored untouched
    assert_eq!(first.weight_kg, 93.35);
    assert_eq!(first.bmi, 17.8);
    assert_eq!(first.body_fat_pct, 19.5);
    assert_eq!(first.lean_body_mass_kg, 50.44);
    assert_eq!(first.body_type, "Average");

    let second = &result.records[1];
    assert_eq!(second.weight_kg, 33.2);
    assert_eq!(second.bmi, 37.7);
}

#[test]
fn test_parse_imperial_export_from_disk() {
    let fixture = write_fixture(IMPERIAL_EXPORT);
    let parser = ScaleCsvParser::new();

    let result = parser.parse_file(fixture.path()).expect("parse failed");
    assert_eq!(result.records.len(), 2);
    assert!(result.stats.is_imperial());

    let first = &result.records[0];
    // Pound-denominated columns are converted and rounded at ingestion
    assert_eq!(first.weight_kg, 35.8);
    assert_eq!(first.muscle_mass_kg, 16.1);
    assert_eq!(first.body_fat_mass_kg, 3.2);
    assert_eq!(first.lean_body_mass_kg, 1.1);
    assert_eq!(first.bone_mass_kg, 0.7);
    assert_eq!(first.skeletal_muscle_mass_kg, 15.1);
    // Percentages stay as exported
    assert_eq!(first.body_fat_pct, 26.3);
    assert_eq!(first.body_water_pct, 50.4);
    // No head size column in the older firmware export
    assert_eq!(first.head_size_cm, 0.0);
}

#[test]
fn test_bom_prefixed_export_parses_identically() {
    let plain = write_fixture(METRIC_EXPORT);
    let with_bom = write_fixture(&format!("\u{feff}{METRIC_EXPORT}"));
    let parser = ScaleCsvParser::new();

    let plain_result = parser.parse_file(plain.path()).expect("parse failed");
    let bom_result = parser.parse_file(with_bom.path()).expect("parse failed");

    assert_eq!(plain_result.records, bom_result.records);
}

#[test]
fn test_unrecognized_header_aborts_parse() {
    let fixture = write_fixture(
        "Time,WEIGHT (kg),BMI,STEP COUNT\n2025-01-17 18:47:20,93.35,17.8,4200\n",
    );
    let parser = ScaleCsvParser::new();

    let err = parser.parse_file(fixture.path()).unwrap_err();
    match err {
        Error::UnrecognizedField { field } => assert_eq!(field, "STEP COUNT"),
        other => panic!("expected UnrecognizedField, got {other:?}"),
    }
}

#[test]
fn test_missing_source_fails_before_parsing() {
    let parser = ScaleCsvParser::new();
    let err = parser
        .parse_file(std::path::Path::new("/no/such/export.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
}
