//! Tests for export filtering and field resolution

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{CanonicalField, WeightRecord};
use crate::app::services::export_filter::{resolve_display_fields, select};
use crate::Error;


/// Build a record with the given timestamp and weight; everything else zeroed
pub fn record_at(timestamp: NaiveDateTime, weight_kg: f64) -> WeightRecord {
    WeightRecord {
        timestamp,
        weight_kg,
        bmi: 0.0,
        body_fat_pct: 0.0,
        heart_rate_bpm: 0.0,
        muscle_mass_kg: 0.0,
        muscle_mass_pct: 0.0,
        basal_metabolic_rate: 0.0,
        body_water_pct: 0.0,
        body_fat_mass_kg: 0.0,
        lean_body_mass_kg: 0.0,
        bone_mass_kg: 0.0,
        bone_mass_pct: 0.0,
        visceral_fat_pct: 0.0,
        protein_pct: 0.0,
        skeletal_muscle_mass_kg: 0.0,
        subcutaneous_fat_pct: 0.0,
        body_age_years: 0.0,
        head_size_cm: 0.0,
        body_type: String::new(),
    }
}

pub fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_default_field_set_is_exact() {
    let fields = resolve_display_fields(&[]).unwrap();
    assert_eq!(
        fields,
        vec![
            CanonicalField::Timestamp,
            CanonicalField::WeightKg,
            CanonicalField::Bmi,
            CanonicalField::BodyFatPct,
            CanonicalField::MuscleMassKg,
            CanonicalField::BasalMetabolicRate,
            CanonicalField::BodyWaterPct,
            CanonicalField::BoneMassKg,
        ]
    );
}

#[test]
fn test_explicit_selection_preserves_order() {
    let names = vec!["Bone Mass".to_string(), "Body Weight".to_string()];
    let fields = resolve_display_fields(&names).unwrap();
    assert_eq!(
        fields,
        vec![CanonicalField::BoneMassKg, CanonicalField::WeightKg]
    );
}

#[test]
fn test_unknown_display_name_is_rejected() {
    let names = vec!["Body Weight".to_string(), "Shoe Size".to_string()];
    let err = resolve_display_fields(&names).unwrap_err();
    match err {
        Error::UnrecognizedField { field } => assert_eq!(field, "Shoe Size"),
        other => panic!("expected UnrecognizedField, got {other:?}"),
    }
}

#[test]
fn test_selection_carries_resolved_fields() {
    let records = [record_at(midnight(2025, 1, 1), 80.0)];
    let fields = vec![CanonicalField::WeightKg];
    let selection = select(
        &records,
        midnight(2025, 1, 1),
        midnight(2025, 1, 2),
        fields.clone(),
    );
    assert_eq!(selection.fields, fields);
}
