//! FIT file writing with overwrite protection

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use super::encoder::FitEncoder;
use crate::app::models::{CanonicalField, WeightRecord};
use crate::app::services::export_filter::Selection;
use crate::{Error, Result};

/// Result of writing one FIT file
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// Number of weight-scale records encoded
    pub records_written: usize,

    /// Total file size in bytes
    pub bytes_written: u64,
}

/// Encode the selection and write it to `path`.
///
/// The output path must not already exist: colliding with a previous export
/// is an error, never an overwrite. Encoding completes in memory before the
/// file is created, so no failure mode leaves a partial file behind.
pub fn write_fit_file(path: &Path, selection: &Selection) -> Result<WriteStats> {
    if path.exists() {
        return Err(Error::sink_exists(path.display().to_string()));
    }

    let mut encoder = FitEncoder::new();
    encoder.write_file_id(Utc::now().naive_utc());
    encoder.write_file_creator();

    for record in &selection.records {
        let values = project(record, &selection.fields);
        encoder.write_weight_scale(record.timestamp, &values);
    }

    let bytes = encoder.finish();
    debug!(
        "Encoded {} records into {} bytes",
        selection.records.len(),
        bytes.len()
    );

    // create_new closes the gap between the existence check and the write
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => Error::sink_exists(path.display().to_string()),
            _ => Error::io(
                format!("Failed to create output file {}", path.display()),
                e,
            ),
        })?;
    file.write_all(&bytes)
        .map_err(|e| Error::io("Failed to write FIT data", e))?;

    info!(
        "Wrote {} records ({} bytes) to {}",
        selection.records.len(),
        bytes.len(),
        path.display()
    );

    Ok(WriteStats {
        records_written: selection.records.len(),
        bytes_written: bytes.len() as u64,
    })
}

/// Project the selected numeric fields of one record into sink values.
///
/// Timestamp and body type carry no numeric value and are skipped here; the
/// timestamp is written by the encoder for every record regardless of
/// selection.
fn project(record: &WeightRecord, fields: &[CanonicalField]) -> HashMap<CanonicalField, f64> {
    let mut values = HashMap::new();
    for &field in fields {
        if let Some(value) = record.value(field) {
            values.insert(field, value);
        }
    }
    values
}
