//! Record filtering and field projection for export
//!
//! Bridges parsed records and the FIT sink: translates the user's
//! display-vocabulary field choice back to canonical fields, restricts the
//! records to an inclusive time range, and orders them ascending by
//! timestamp. This module never writes output; its [`Selection`] is the sole
//! input the FIT writer consumes.

use chrono::NaiveDateTime;
use tracing::debug;

use super::scale_csv_parser::column_mapping;
use crate::app::models::{CanonicalField, WeightRecord};
use crate::constants::DEFAULT_EXPORT_FIELDS;
use crate::Result;

#[cfg(test)]
pub mod tests;

/// Filtered, time-ordered records plus the resolved canonical field list
#[derive(Debug, Clone)]
pub struct Selection {
    /// Records inside the requested range, ascending by timestamp
    pub records: Vec<WeightRecord>,

    /// Canonical fields to project into the sink, in selection order
    pub fields: Vec<CanonicalField>,
}

/// Translate display field names into canonical fields.
///
/// An empty selection resolves to the fixed default set
/// ([`DEFAULT_EXPORT_FIELDS`]); an unknown display name aborts with
/// [`Error::UnrecognizedField`](crate::Error::UnrecognizedField).
pub fn resolve_display_fields(names: &[String]) -> Result<Vec<CanonicalField>> {
    if names.is_empty() {
        debug!("No explicit field selection, using default export set");
        return DEFAULT_EXPORT_FIELDS
            .iter()
            .map(|name| column_mapping::from_display_name(name))
            .collect();
    }

    names
        .iter()
        .map(|name| column_mapping::from_display_name(name))
        .collect()
}

/// Restrict records to `[start, end]` (inclusive both ends) and sort them
/// ascending by timestamp.
///
/// Input order is irrelevant; duplicate timestamps are kept and their
/// relative order preserved.
pub fn select(
    records: &[WeightRecord],
    start: NaiveDateTime,
    end: NaiveDateTime,
    fields: Vec<CanonicalField>,
) -> Selection {
    let mut picked: Vec<WeightRecord> = records
        .iter()
        .filter(|record| start <= record.timestamp && record.timestamp <= end)
        .cloned()
        .collect();
    picked.sort_by_key(|record| record.timestamp);

    debug!(
        "Selected {} of {} records in range {} - {}",
        picked.len(),
        records.len(),
        start,
        end
    );

    Selection {
        records: picked,
        fields,
    }
}
