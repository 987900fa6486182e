//! CSV parser for smart-scale body composition exports
//!
//! This module turns a raw scale export into canonical, metric-unit
//! [`WeightRecord`](crate::app::models::WeightRecord)s. The header vocabulary
//! is fixed: every column the scale app can emit is listed in one mapping
//! table, and anything outside that table aborts the parse.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`column_mapping`] - The fixed header vocabulary and display-name table
//! - [`record_parser`] - Individual CSV row processing
//! - [`field_parsers`] - Utility functions for value parsing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scale2fit::app::services::scale_csv_parser::ScaleCsvParser;
//!
//! # fn example() -> scale2fit::Result<()> {
//! let parser = ScaleCsvParser::new();
//! let result = parser.parse_file(std::path::Path::new("export.csv"))?;
//!
//! println!("Parsed {} readings", result.stats.records_parsed);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, ColumnTarget};
pub use parser::ScaleCsvParser;
pub use stats::{ParseResult, ParseStats};
