//! Core scale export parser implementation
//!
//! This module provides the main parser orchestration: source validation,
//! BOM handling, header analysis, and per-row record assembly.

use std::path::Path;

use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_weight_record;
use super::stats::{ParseResult, ParseStats};
use crate::constants::UTF8_BOM;
use crate::{Error, Result};

/// Parser for smart-scale CSV exports
///
/// Reads the whole export into memory and assembles one canonical record per
/// data row. The first unrecognized header anywhere in the file aborts the
/// parse with no partial results.
#[derive(Debug, Default)]
pub struct ScaleCsvParser;

impl ScaleCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a scale export file and return records with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        // Covers both a missing path and a non-regular file (directory, fifo)
        if !file_path.is_file() {
            return Err(Error::source_not_found(file_path.display().to_string()));
        }

        info!("Parsing scale export: {}", file_path.display());

        let content = std::fs::read_to_string(file_path)
            .map_err(|e| Error::io(format!("Failed to read file {}", file_path.display()), e))?;

        self.parse_content(&content)
    }

    /// Parse export content that has already been read into memory.
    ///
    /// A leading UTF-8 byte-order marker, as written by the vendor app on
    /// some platforms, is stripped transparently.
    pub fn parse_content(&self, content: &str) -> Result<ParseResult> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing("scale export", "Failed to read CSV header row", Some(e))
            })?
            .clone();

        let mapping = ColumnMapping::analyze(&headers)?;
        debug!(
            "Column mapping: {} columns, {} pound-denominated",
            headers.len(),
            mapping.pound_columns()
        );

        let mut stats = ParseStats {
            pound_columns: mapping.pound_columns(),
            ..ParseStats::new()
        };
        let mut records = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            stats.rows_read += 1;

            let parsed = parse_weight_record(&record, &mapping)?;
            records.push(parsed);
            stats.records_parsed += 1;
        }

        info!(
            "Parsed {} records from {} rows",
            stats.records_parsed, stats.rows_read
        );

        Ok(ParseResult { records, stats })
    }
}
