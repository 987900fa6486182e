//! Fixed column vocabulary for scale exports
//!
//! Single source of truth for header resolution: every recognized raw column
//! header maps to a canonical field (or is ignored), with a flag for headers
//! whose values are pound-denominated. The same table carries the sink-facing
//! display names, so parsing and export-side translation can never drift
//! apart.

use csv::StringRecord;

use crate::app::models::CanonicalField;
use crate::{Error, Result};

/// What a recognized source column maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTarget {
    /// Present in exports but not carried into the canonical record
    Ignored,
    /// Maps onto a canonical field; `pounds` marks headers whose values must
    /// be converted from pounds to kilograms at ingestion
    Field {
        field: CanonicalField,
        pounds: bool,
    },
}

const fn metric(field: CanonicalField) -> ColumnTarget {
    ColumnTarget::Field {
        field,
        pounds: false,
    }
}

const fn imperial(field: CanonicalField) -> ColumnTarget {
    ColumnTarget::Field {
        field,
        pounds: true,
    }
}

/// Every raw header the scale app can emit, in export column order.
///
/// Matching is exact, including the embedded unit annotation: `WEIGHT (kg)`
/// and `WEIGHT (lbs)` are distinct entries resolving to the same canonical
/// field with different unit handling.
const SOURCE_COLUMNS: &[(&str, ColumnTarget)] = &[
    ("Time", metric(CanonicalField::Timestamp)),
    ("Family Members", ColumnTarget::Ignored),
    ("WEIGHT (kg)", metric(CanonicalField::WeightKg)),
    ("WEIGHT (lbs)", imperial(CanonicalField::WeightKg)),
    ("BMI", metric(CanonicalField::Bmi)),
    ("BODY FAT %", metric(CanonicalField::BodyFatPct)),
    ("HEART RATE (bpm)", metric(CanonicalField::HeartRateBpm)),
    ("MUSCLE MASS (kg)", metric(CanonicalField::MuscleMassKg)),
    ("MUSCLE MASS (lbs)", imperial(CanonicalField::MuscleMassKg)),
    ("MUSCLE MASS %", metric(CanonicalField::MuscleMassPct)),
    ("BMR", metric(CanonicalField::BasalMetabolicRate)),
    ("WATER", metric(CanonicalField::BodyWaterPct)),
    ("BODY FAT MASS (kg)", metric(CanonicalField::BodyFatMassKg)),
    ("BODY FAT MASS (lbs)", imperial(CanonicalField::BodyFatMassKg)),
    ("LEAN BODY MASS (kg)", metric(CanonicalField::LeanBodyMassKg)),
    ("LEAN BODY MASS (lbs)", imperial(CanonicalField::LeanBodyMassKg)),
    ("BONE MASS (kg)", metric(CanonicalField::BoneMassKg)),
    ("BONE MASS (lbs)", imperial(CanonicalField::BoneMassKg)),
    ("BONE MASS %", metric(CanonicalField::BoneMassPct)),
    ("VISCERAL FAT", metric(CanonicalField::VisceralFatPct)),
    ("PROTEIN %", metric(CanonicalField::ProteinPct)),
    (
        "SKELETAL MUSCLE MASS (kg)",
        metric(CanonicalField::SkeletalMuscleMassKg),
    ),
    (
        "SKELETAL MUSCLE MASS (lbs)",
        imperial(CanonicalField::SkeletalMuscleMassKg),
    ),
    (
        "SUBCUTANEOUS FAT %",
        metric(CanonicalField::SubcutaneousFatPct),
    ),
    ("BODY AGE", metric(CanonicalField::BodyAgeYears)),
    ("BODY TYPE", metric(CanonicalField::BodyType)),
    ("HEAD SIZE (cm)", metric(CanonicalField::HeadSizeCm)),
];

/// Sink-facing display names, one per exportable canonical field.
///
/// Only fields the FIT weight-scale message can carry appear here (plus
/// `Date`); a canonical field without a display name is parseable but not
/// selectable for export. The scale's plain "MUSCLE MASS" reading is what
/// Garmin labels skeletal muscle mass.
const DISPLAY_NAMES: &[(CanonicalField, &str)] = &[
    (CanonicalField::Timestamp, "Date"),
    (CanonicalField::WeightKg, "Body Weight"),
    (CanonicalField::Bmi, "BMI"),
    (CanonicalField::BodyFatPct, "Body Fat"),
    (CanonicalField::MuscleMassKg, "Skeletal Muscle Mass"),
    (CanonicalField::BasalMetabolicRate, "Basal Metabolic Rate"),
    (CanonicalField::BodyWaterPct, "Body Water"),
    (CanonicalField::BoneMassKg, "Bone Mass"),
    (CanonicalField::VisceralFatPct, "Visceral Fat"),
    (CanonicalField::BodyAgeYears, "Metabolic Age"),
];

/// Resolve a raw column header against the fixed vocabulary.
///
/// No partial matching and no case folding: a header must match a table
/// entry exactly or the whole parse is rejected.
pub fn resolve(raw_header: &str) -> Result<ColumnTarget> {
    SOURCE_COLUMNS
        .iter()
        .find(|(header, _)| *header == raw_header)
        .map(|(_, target)| *target)
        .ok_or_else(|| Error::unrecognized_field(raw_header))
}

/// Sink-facing display name for a canonical field, if it is exportable
pub fn display_name(field: CanonicalField) -> Option<&'static str> {
    DISPLAY_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, name)| *name)
}

/// Translate a sink-facing display name back to its canonical field
pub fn from_display_name(name: &str) -> Result<CanonicalField> {
    DISPLAY_NAMES
        .iter()
        .find(|(_, candidate)| *candidate == name)
        .map(|(field, _)| *field)
        .ok_or_else(|| Error::unrecognized_field(name))
}

/// The exportable fields with their display names, in menu order
pub fn selectable_fields() -> &'static [(CanonicalField, &'static str)] {
    DISPLAY_NAMES
}

/// Resolved header row of one export file
///
/// Holds one [`ColumnTarget`] per header position, so row parsing is a plain
/// indexed walk with no further string matching.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    targets: Vec<ColumnTarget>,
}

impl ColumnMapping {
    /// Resolve every header of the row through the fixed vocabulary.
    ///
    /// Fails on the first unrecognized header, and requires the mandatory
    /// `Time`, weight, and `BMI` columns to be present: a well-formed export
    /// always carries them, and silently materializing sentinel defaults for
    /// them would corrupt the output.
    pub fn analyze(headers: &StringRecord) -> Result<Self> {
        let mut targets = Vec::with_capacity(headers.len());
        for header in headers.iter() {
            targets.push(resolve(header)?);
        }

        let mapping = Self { targets };
        mapping.require(CanonicalField::Timestamp, "Time")?;
        mapping.require(CanonicalField::WeightKg, "WEIGHT (kg) or WEIGHT (lbs)")?;
        mapping.require(CanonicalField::Bmi, "BMI")?;
        Ok(mapping)
    }

    fn require(&self, field: CanonicalField, column: &str) -> Result<()> {
        if self.has_field(field) {
            Ok(())
        } else {
            Err(Error::missing_column(column))
        }
    }

    /// Whether any column resolves to the given canonical field
    pub fn has_field(&self, field: CanonicalField) -> bool {
        self.targets.iter().any(|target| {
            matches!(target, ColumnTarget::Field { field: f, .. } if *f == field)
        })
    }

    /// Per-position targets, indexed like the header row
    pub fn targets(&self) -> &[ColumnTarget] {
        &self.targets
    }

    /// Number of pound-denominated columns in this export
    pub fn pound_columns(&self) -> usize {
        self.targets
            .iter()
            .filter(|target| matches!(target, ColumnTarget::Field { pounds: true, .. }))
            .count()
    }
}
