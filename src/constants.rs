//! Application constants for scale2fit
//!
//! This module contains the fixed conversion factors, textual formats,
//! and default selections used throughout the conversion pipeline.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Pounds to kilograms conversion factor (exact, by definition)
pub const LBS_TO_KG_FACTOR: f64 = 0.453_592_37;

/// Convert a pound-denominated value to kilograms, rounded to one decimal
/// place. The rounding happens at ingestion time and the stored value is the
/// rounded one.
pub fn pounds_to_kg(lbs: f64) -> f64 {
    (lbs * LBS_TO_KG_FACTOR * 10.0).round() / 10.0
}

// =============================================================================
// Textual Formats
// =============================================================================

/// Datetime format used in the `Time` column of scale exports
pub const SCALE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format accepted by the batch command's `--start`/`--end` arguments
pub const CLI_DATE_FORMAT: &str = "%Y-%m-%d";

/// UTF-8 byte-order marker optionally present at the start of scale exports
pub const UTF8_BOM: &str = "\u{feff}";

// =============================================================================
// Export Defaults
// =============================================================================

/// Default display field selection when the user makes no explicit choice.
///
/// Matches the most common export need: the fields Garmin Connect shows on
/// its weight dashboard.
pub const DEFAULT_EXPORT_FIELDS: &[&str] = &[
    "Date",
    "Body Weight",
    "BMI",
    "Body Fat",
    "Skeletal Muscle Mass",
    "Basal Metabolic Rate",
    "Body Water",
    "Bone Mass",
];

// =============================================================================
// FIT Encoding
// =============================================================================

/// Offset between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z)
pub const FIT_EPOCH_OFFSET_SECS: i64 = 631_065_600;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kg_rounding() {
        // One decimal place, stored rounded
        assert_eq!(pounds_to_kg(79.01), 35.8);
        assert_eq!(pounds_to_kg(35.44), 16.1);
        assert_eq!(pounds_to_kg(1.61), 0.7);
        assert_eq!(pounds_to_kg(0.0), 0.0);
    }

    #[test]
    fn test_default_export_fields() {
        assert_eq!(DEFAULT_EXPORT_FIELDS.len(), 8);
        assert!(DEFAULT_EXPORT_FIELDS.contains(&"Body Weight"));
        assert!(DEFAULT_EXPORT_FIELDS.contains(&"Bone Mass"));
    }
}
