//! Parsing statistics and result structures for scale export processing

use crate::app::models::WeightRecord;

/// Parsing result with canonical records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed records, in source file order
    pub records: Vec<WeightRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data rows read from the source
    pub rows_read: usize,

    /// Number of records successfully parsed
    ///
    /// Parsing is fail-fast, so this either equals `rows_read` or the whole
    /// run aborted.
    pub records_parsed: usize,

    /// Number of pound-denominated columns in the source header
    pub pound_columns: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the source used any imperial units
    pub fn is_imperial(&self) -> bool {
        self.pound_columns > 0
    }
}
