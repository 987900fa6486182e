//! Individual CSV row parsing for scale exports
//!
//! Each row is parsed into an optional-valued draft first; defaults are
//! materialized only for fields the export never set. This keeps "value was
//! absent" distinct from "value was zero" until the very end.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use csv::StringRecord;
use tracing::trace;

use super::column_mapping::{ColumnMapping, ColumnTarget};
use super::field_parsers::{parse_datetime_value, parse_float_value};
use crate::app::models::{CanonicalField, WeightRecord};
use crate::constants::pounds_to_kg;
use crate::{Error, Result};

/// Optional-valued intermediate built up while a row is parsed
#[derive(Debug, Default)]
struct RecordDraft {
    timestamp: Option<NaiveDateTime>,
    body_type: Option<String>,
    values: HashMap<CanonicalField, f64>,
}

impl RecordDraft {
    /// Materialize the canonical record, defaulting every field never set.
    ///
    /// Header analysis guarantees a `Time` column, so an absent timestamp is
    /// unreachable in practice; it is still surfaced as an error rather than
    /// papered over with a sentinel.
    fn materialize(mut self) -> Result<WeightRecord> {
        let timestamp = self
            .timestamp
            .ok_or_else(|| Error::missing_column("Time"))?;
        let mut num = |field: CanonicalField| self.values.remove(&field).unwrap_or(0.0);

        Ok(WeightRecord {
            timestamp,
            weight_kg: num(CanonicalField::WeightKg),
            bmi: num(CanonicalField::Bmi),
            body_fat_pct: num(CanonicalField::BodyFatPct),
            heart_rate_bpm: num(CanonicalField::HeartRateBpm),
            muscle_mass_kg: num(CanonicalField::MuscleMassKg),
            muscle_mass_pct: num(CanonicalField::MuscleMassPct),
            basal_metabolic_rate: num(CanonicalField::BasalMetabolicRate),
            body_water_pct: num(CanonicalField::BodyWaterPct),
            body_fat_mass_kg: num(CanonicalField::BodyFatMassKg),
            lean_body_mass_kg: num(CanonicalField::LeanBodyMassKg),
            bone_mass_kg: num(CanonicalField::BoneMassKg),
            bone_mass_pct: num(CanonicalField::BoneMassPct),
            visceral_fat_pct: num(CanonicalField::VisceralFatPct),
            protein_pct: num(CanonicalField::ProteinPct),
            skeletal_muscle_mass_kg: num(CanonicalField::SkeletalMuscleMassKg),
            subcutaneous_fat_pct: num(CanonicalField::SubcutaneousFatPct),
            body_age_years: num(CanonicalField::BodyAgeYears),
            head_size_cm: num(CanonicalField::HeadSizeCm),
            body_type: self.body_type.unwrap_or_default(),
        })
    }
}

/// Parse a single canonical record from one CSV data row.
///
/// Columns resolve positionally through the pre-analyzed mapping; ignored
/// columns are skipped, pound-denominated values are converted to kilograms
/// as they are read, and any value that fails to parse aborts the whole run.
pub fn parse_weight_record(record: &StringRecord, mapping: &ColumnMapping) -> Result<WeightRecord> {
    let mut draft = RecordDraft::default();

    for (index, target) in mapping.targets().iter().enumerate() {
        let Some(raw) = record.get(index) else {
            continue;
        };

        match *target {
            ColumnTarget::Ignored => {}
            ColumnTarget::Field { field, pounds } => match field {
                CanonicalField::Timestamp => {
                    draft.timestamp = Some(parse_datetime_value(raw)?);
                }
                CanonicalField::BodyType => {
                    draft.body_type = Some(raw.trim().to_string());
                }
                _ => {
                    let mut value = parse_float_value(field, raw)?;
                    if pounds {
                        trace!("Converting {} from pounds: {} lbs", field, value);
                        value = pounds_to_kg(value);
                    }
                    draft.values.insert(field, value);
                }
            },
        }
    }

    draft.materialize()
}
