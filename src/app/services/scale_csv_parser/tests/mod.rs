//! Test utilities and fixtures for scale export parser testing

use std::io::Write;

use tempfile::NamedTempFile;


/// Full-width metric export with two readings
pub fn metric_export() -> String {
    let mut csv = String::new();
    csv.push_str("Time,Family Members,WEIGHT (kg),BMI,BODY FAT %,HEART RATE (bpm),");
    csv.push_str("MUSCLE MASS (kg),MUSCLE MASS %,BMR,WATER,BODY FAT MASS (kg),");
    csv.push_str("LEAN BODY MASS (kg),BONE MASS (kg),BONE MASS %,VISCERAL FAT,PROTEIN %,");
    csv.push_str("SKELETAL MUSCLE MASS (kg),SUBCUTANEOUS FAT %,BODY AGE,BODY TYPE,HEAD SIZE (cm)\n");
    csv.push_str(
        "2025-01-17 18:47:20,Alice,93.35,17.8,19.5,54,45.4,48.9,1572,50.6,12.9,50.44,3,4.6,24,18.3,36.6,36.8,23,Average,0\n",
    );
    csv.push_str(
        "2025-01-18 08:54:08,Alice,33.2,37.7,10.5,60,32.4,28.9,1571,30.6,32.8,70.4,3,2.6,44,21.5,27.5,12.7,73,Average,0\n",
    );
    csv
}

/// Imperial export from older firmware: pound-denominated mass columns and
/// no head size column
pub fn imperial_export() -> String {
    let mut csv = String::new();
    csv.push_str("Time,Family Members,WEIGHT (lbs),BMI,BODY FAT %,HEART RATE (bpm),");
    csv.push_str("MUSCLE MASS (lbs),MUSCLE MASS %,BMR,WATER,BODY FAT MASS (lbs),");
    csv.push_str("LEAN BODY MASS (lbs),BONE MASS (lbs),BONE MASS %,VISCERAL FAT,PROTEIN %,");
    csv.push_str("SKELETAL MUSCLE MASS (lbs),SUBCUTANEOUS FAT %,BODY AGE,BODY TYPE\n");
    csv.push_str(
        "2025-05-01 11:06:55,Bob,79.01,27.1,26.3,97,35.44,70.0,1541,50.4,6.95,2.49,1.61,3.7,14,15.5,33.32,22.7,23,Average\n",
    );
    csv.push_str(
        "2025-04-29 05:38:45,Bob,81.21,27.4,27.0,77,35.88,69.4,1556,50.0,8.72,12.49,6.61,3.6,18,15.3,17.51,23.2,73,Average\n",
    );
    csv
}

/// Minimal well-formed export carrying only the mandatory columns
pub fn minimal_export() -> String {
    "Time,WEIGHT (kg),BMI\n2025-01-17 18:47:20,93.35,17.8\n".to_string()
}

/// Write content to a named temporary file for parse_file tests
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
