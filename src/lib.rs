//! scale2fit Library
//!
//! A Rust library for converting smart-scale body composition exports from
//! CSV format into Garmin-compatible FIT weight files.
//!
//! This library provides tools for:
//! - Parsing scale export CSV files with metric and imperial column variants
//! - Normalizing every measurement into a canonical metric record
//! - Filtering records by an inclusive date range and sorting by timestamp
//! - Projecting a user-selected subset of fields into the FIT field set
//! - Encoding FIT weight-scale files with proper header and CRC framing
//! - Comprehensive error handling with fail-fast semantics

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_filter;
        pub mod fit_writer;
        pub mod scale_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{CanonicalField, WeightRecord};
pub use app::services::scale_csv_parser::ScaleCsvParser;

/// Result type alias for scale2fit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the conversion pipeline
///
/// Every error is fatal: nothing is retried and no partial output file is
/// ever produced.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Source path missing or not a regular file
    #[error("Source file not found or not a regular file: {path}")]
    SourceNotFound { path: String },

    /// A CSV header or display field name outside the fixed vocabulary
    #[error("Unrecognized field: '{field}'")]
    UnrecognizedField { field: String },

    /// A value failed to parse as the expected type
    #[error("Malformed value for field '{field}': '{value}'")]
    MalformedValue { field: String, value: String },

    /// A mandatory source column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Output path already exists
    #[error("Output file already exists, refusing to overwrite: {path}")]
    SinkExists { path: String },

    /// Batch mode start/end string outside the fixed date pattern
    #[error("Invalid date range: {message}")]
    InvalidDateRange { message: String },

    /// Configuration or user-input error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a source-not-found error
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create an unrecognized-field error carrying the offending string
    pub fn unrecognized_field(field: impl Into<String>) -> Self {
        Self::UnrecognizedField {
            field: field.into(),
        }
    }

    /// Create a malformed-value error
    pub fn malformed_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a missing-column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a sink-exists error
    pub fn sink_exists(path: impl Into<String>) -> Self {
        Self::SinkExists { path: path.into() }
    }

    /// Create an invalid-date-range error
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
