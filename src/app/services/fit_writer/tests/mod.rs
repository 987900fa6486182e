//! Test utilities for FIT encoding and writing

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{CanonicalField, WeightRecord};
use crate::app::services::export_filter::Selection;

// Test modules
mod crc_tests;
mod writer_tests;

pub fn reading_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 17)
        .unwrap()
        .and_hms_opt(18, 47, 20)
        .unwrap()
}

pub fn sample_record() -> WeightRecord {
    WeightRecord {
        timestamp: reading_time(),
        weight_kg: 93.35,
        bmi: 17.8,
        body_fat_pct: 19.5,
        heart_rate_bpm: 54.0,
        muscle_mass_kg: 45.4,
        muscle_mass_pct: 48.9,
        basal_metabolic_rate: 1572.0,
        body_water_pct: 50.6,
        body_fat_mass_kg: 12.9,
        lean_body_mass_kg: 50.44,
        bone_mass_kg: 3.0,
        bone_mass_pct: 4.6,
        visceral_fat_pct: 24.0,
        protein_pct: 18.3,
        skeletal_muscle_mass_kg: 36.6,
        subcutaneous_fat_pct: 36.8,
        body_age_years: 23.0,
        head_size_cm: 0.0,
        body_type: "Average".to_string(),
    }
}

pub fn sample_selection() -> Selection {
    Selection {
        records: vec![sample_record()],
        fields: vec![
            CanonicalField::Timestamp,
            CanonicalField::WeightKg,
            CanonicalField::Bmi,
        ],
    }
}
