//! Shared components for CLI commands
//!
//! Common validation, logging setup, progress reporting, and summary output
//! used by both the interactive and batch commands.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{Error, Result};

/// Conversion statistics for reporting across commands
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of records parsed from the source
    pub records_parsed: usize,
    /// Number of records exported to the sink
    pub records_exported: usize,
    /// Output file size in bytes
    pub output_bytes: u64,
    /// Total conversion time
    pub elapsed: Duration,
}

/// Set up structured logging with the requested verbosity
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scale2fit={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Validate source and sink paths before any work happens.
///
/// The source must be an existing regular file; the sink must not exist at
/// all, so a prior export is never clobbered.
pub fn validate_paths(source: &Path, sink: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(Error::source_not_found(source.display().to_string()));
    }
    if sink.exists() {
        return Err(Error::sink_exists(sink.display().to_string()));
    }
    Ok(())
}

/// Spinner shown while the pipeline runs
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the end-of-run summary line
pub fn report_summary(stats: &ConversionStats, output: &Path) {
    println!(
        "{} exported {} of {} records to {} ({}) in {}",
        "Done:".green().bold(),
        stats.records_exported.to_string().bold(),
        stats.records_parsed,
        output.display().to_string().cyan(),
        format_size(stats.output_bytes),
        HumanDuration(stats.elapsed)
    );
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
