//! Field parsing utilities for scale export values

use chrono::NaiveDateTime;

use crate::app::models::CanonicalField;
use crate::constants::SCALE_DATETIME_FORMAT;
use crate::{Error, Result};

/// Parse a `Time` column value in the fixed export format
/// (`YYYY-MM-DD HH:MM:SS`, no timezone)
pub fn parse_datetime_value(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), SCALE_DATETIME_FORMAT)
        .map_err(|_| Error::malformed_value("Time", value))
}

/// Parse a numeric measurement value
pub fn parse_float_value(field: CanonicalField, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::malformed_value(field.identifier(), value))
}
