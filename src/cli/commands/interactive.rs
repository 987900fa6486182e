//! Interactive command implementation
//!
//! Parses the source first, then runs the selection collaborator: a field
//! picker and a date-range picker over the distinct parsed timestamps. The
//! chosen values are handed to the same core pipeline the batch command uses.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{ConversionStats, create_spinner, report_summary, setup_logging, validate_paths};
use crate::app::services::export_filter;
use crate::app::services::fit_writer::write_fit_file;
use crate::app::services::scale_csv_parser::ScaleCsvParser;
use crate::cli::args::InteractiveArgs;
use crate::cli::input;
use crate::{Error, Result};

/// Interactive command runner
pub fn run_interactive(args: InteractiveArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;
    info!("Starting interactive conversion");
    debug!("Command line arguments: {:?}", args);

    validate_paths(&args.filename, &args.output)?;

    let parsed = ScaleCsvParser::new().parse_file(&args.filename)?;
    if parsed.records.is_empty() {
        return Err(Error::configuration(format!(
            "No readings found in {}",
            args.filename.display()
        )));
    }

    // Selection happens before any output exists; cancelling here is free
    let field_names = input::prompt_field_selection()?;
    let (range_start, range_end) = input::prompt_date_range(&parsed.records)?;
    info!(
        "User selected {} fields, range {} - {}",
        field_names.len(),
        range_start,
        range_end
    );

    let spinner = (!args.quiet).then(|| create_spinner("Converting..."));

    let fields = export_filter::resolve_display_fields(&field_names)?;
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
