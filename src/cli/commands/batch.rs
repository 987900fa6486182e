//! Batch command implementation
//!
//! Non-interactive conversion: the date range comes from `--start`/`--end`
//! and the field selection is always the default export set.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{ConversionStats, create_spinner, report_summary, setup_logging, validate_paths};
use crate::Result;
use crate::app::services::export_filter;
use crate::app::services::fit_writer::write_fit_file;
use crate::app::services::scale_csv_parser::ScaleCsvParser;
use crate::cli::args::BatchArgs;

/// Batch command runner
pub fn run_batch(args: BatchArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;
    info!("Starting batch conversion");
    debug!("Command line arguments: {:?}", args);

    validate_paths(&args.filename, &args.output)?;
    let (range_start, range_end) = args.date_range()?;

    let spinner = (!args.quiet).then(|| create_spinner("Converting..."));

    let parsed = ScaleCsvParser::new().parse_file(&args.filename)?;
    let fields = export_filter::resolve_display_fields(&[])?;
    let selection = export_filter::select(&parsed.records, range_start, range_end, fields);
    let write_stats = write_fit_file(&args.output, &selection)?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let stats = ConversionStats {
        records_parsed: parsed.stats.records_parsed,
        records_exported: write_stats.records_written,
        output_bytes: write_stats.bytes_written,
        elapsed: start_time.elapsed(),
    };

    if !args.quiet {
        report_summary(&stats, &args.output);
    }

    Ok(stats)
}
