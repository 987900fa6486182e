//! Data models for scale2fit
//!
//! This module contains the canonical representation of a single scale
//! reading and the enumeration of canonical measurement fields shared by the
//! parser and the export side.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Canonical Fields
// =============================================================================

/// The fixed set of canonical, unit-normalized measurement attributes.
///
/// Canonical fields are the common vocabulary between the CSV parser (raw
/// source header -> canonical field) and the FIT export side (display name ->
/// canonical field). Every mass-valued field is denominated in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Timestamp,
    WeightKg,
    Bmi,
    BodyFatPct,
    HeartRateBpm,
    MuscleMassKg,
    MuscleMassPct,
    BasalMetabolicRate,
    BodyWaterPct,
    BodyFatMassKg,
    LeanBodyMassKg,
    BoneMassKg,
    BoneMassPct,
    VisceralFatPct,
    ProteinPct,
    SkeletalMuscleMassKg,
    SubcutaneousFatPct,
    BodyAgeYears,
    HeadSizeCm,
    BodyType,
}

impl CanonicalField {
    /// Stable snake_case identifier, used in log and error messages
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::WeightKg => "weight_kg",
            Self::Bmi => "bmi",
            Self::BodyFatPct => "body_fat_pct",
            Self::HeartRateBpm => "heart_rate_bpm",
            Self::MuscleMassKg => "muscle_mass_kg",
            Self::MuscleMassPct => "muscle_mass_pct",
            Self::BasalMetabolicRate => "basal_metabolic_rate",
            Self::BodyWaterPct => "body_water_pct",
            Self::BodyFatMassKg => "body_fat_mass_kg",
            Self::LeanBodyMassKg => "lean_body_mass_kg",
            Self::BoneMassKg => "bone_mass_kg",
            Self::BoneMassPct => "bone_mass_pct",
            Self::VisceralFatPct => "visceral_fat_pct",
            Self::ProteinPct => "protein_pct",
            Self::SkeletalMuscleMassKg => "skeletal_muscle_mass_kg",
            Self::SubcutaneousFatPct => "subcutaneous_fat_pct",
            Self::BodyAgeYears => "body_age_years",
            Self::HeadSizeCm => "head_size_cm",
            Self::BodyType => "body_type",
        }
    }

    /// Whether values for this field parse as floats
    ///
    /// `Timestamp` parses as a datetime and `BodyType` passes through as a
    /// string; everything else is numeric.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Timestamp | Self::BodyType)
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

// =============================================================================
// Weight Record
// =============================================================================

/// One scale reading at one point in time, fully normalized to metric units.
///
/// Records are created once per CSV row during parsing and are immutable
/// afterwards; the export filter clones and reorders them but never rewrites
/// field values. Duplicate timestamps are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Reading time, as written by the scale (no timezone in the export)
    pub timestamp: NaiveDateTime,

    /// Body weight in kilograms, converted from pounds where necessary
    pub weight_kg: f64,

    /// Body mass index
    pub bmi: f64,

    /// Body fat as a percentage of body weight
    pub body_fat_pct: f64,

    /// Heart rate measured during the reading, beats per minute
    pub heart_rate_bpm: f64,

    /// Muscle mass in kilograms
    pub muscle_mass_kg: f64,

    /// Muscle mass as a percentage of body weight
    pub muscle_mass_pct: f64,

    /// Basal metabolic rate, kcal/day
    pub basal_metabolic_rate: f64,

    /// Body water as a percentage of body weight
    pub body_water_pct: f64,

    /// Fat mass in kilograms
    pub body_fat_mass_kg: f64,

    /// Lean body mass in kilograms
    pub lean_body_mass_kg: f64,

    /// Bone mass in kilograms
    pub bone_mass_kg: f64,

    /// Bone mass as a percentage of body weight
    pub bone_mass_pct: f64,

    /// Visceral fat rating
    pub visceral_fat_pct: f64,

    /// Protein as a percentage of body weight
    pub protein_pct: f64,

    /// Skeletal muscle mass in kilograms
    pub skeletal_muscle_mass_kg: f64,

    /// Subcutaneous fat as a percentage of body weight
    pub subcutaneous_fat_pct: f64,

    /// Estimated metabolic age in years
    pub body_age_years: f64,

    /// Head circumference in centimeters (newer firmware only)
    pub head_size_cm: f64,

    /// Body type categorization string, empty when the export omits it
    pub body_type: String,
}

impl WeightRecord {
    /// Numeric value of a canonical field, if the field is numeric.
    ///
    /// Returns `None` for [`CanonicalField::Timestamp`] and
    /// [`CanonicalField::BodyType`]; the export projection uses this as its
    /// single dispatch point from field list to record values.
    pub fn value(&self, field: CanonicalField) -> Option<f64> {
        match field {
            CanonicalField::Timestamp | CanonicalField::BodyType => None,
            CanonicalField::WeightKg => Some(self.weight_kg),
            CanonicalField::Bmi => Some(self.bmi),
            CanonicalField::BodyFatPct => Some(self.body_fat_pct),
            CanonicalField::HeartRateBpm => Some(self.heart_rate_bpm),
            CanonicalField::MuscleMassKg => Some(self.muscle_mass_kg),
            CanonicalField::MuscleMassPct => Some(self.muscle_mass_pct),
            CanonicalField::BasalMetabolicRate => Some(self.basal_metabolic_rate),
            CanonicalField::BodyWaterPct => Some(self.body_water_pct),
            CanonicalField::BodyFatMassKg => Some(self.body_fat_mass_kg),
            CanonicalField::LeanBodyMassKg => Some(self.lean_body_mass_kg),
            CanonicalField::BoneMassKg => Some(self.bone_mass_kg),
            CanonicalField::BoneMassPct => Some(self.bone_mass_pct),
            CanonicalField::VisceralFatPct => Some(self.visceral_fat_pct),
            CanonicalField::ProteinPct => Some(self.protein_pct),
            CanonicalField::SkeletalMuscleMassKg => Some(self.skeletal_muscle_mass_kg),
            CanonicalField::SubcutaneousFatPct => Some(self.subcutaneous_fat_pct),
            CanonicalField::BodyAgeYears => Some(self.body_age_years),
            CanonicalField::HeadSizeCm => Some(self.head_size_cm),
        }
    }
}
