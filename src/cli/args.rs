//! Command-line argument definitions for scale2fit
//!
//! This module defines the complete CLI interface using clap derive API.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

use crate::constants::CLI_DATE_FORMAT;
use crate::{Error, Result};

/// CLI arguments for the scale2fit converter
///
/// Converts smart-scale body composition exports from CSV format into
/// Garmin-compatible FIT weight files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scale2fit",
    version,
    about = "Convert smart-scale body composition CSV exports into Garmin FIT weight files",
    long_about = "Converts the CSV export of a smart scale companion app into a FIT weight \
                  file that Garmin Connect and compatible trackers can import. Handles metric \
                  and imperial export variants, normalizes every measurement to metric units, \
                  and lets you choose which fields to carry over and which date range to export."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for scale2fit
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Pick export fields and date range interactively
    Interactive(InteractiveArgs),
    /// Convert without prompts, using the default field set
    Batch(BatchArgs),
}

/// Arguments for the interactive command
#[derive(Debug, Clone, Parser)]
pub struct InteractiveArgs {
    /// Scale export CSV file to convert
    #[arg(
        short = 'f',
        long = "filename",
        value_name = "FILE",
        help = "Scale export CSV file to convert"
    )]
    pub filename: PathBuf,

    /// Output FIT file to create
    ///
    /// Must not already exist; an existing file is never overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output FIT file to create (must not exist)"
    )]
    pub output: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the batch command
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Scale export CSV file to convert
    #[arg(
        short = 'f',
        long = "filename",
        value_name = "FILE",
        help = "Scale export CSV file to convert"
    )]
    pub filename: PathBuf,

    /// Output FIT file to create
    ///
    /// Must not already exist; an existing file is never overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output FIT file to create (must not exist)"
    )]
    pub output: PathBuf,

    /// First day of the export range (YYYY-MM-DD, inclusive)
    #[arg(
        long = "start",
        value_name = "DATE",
        help = "First day of the export range (YYYY-MM-DD, inclusive)"
    )]
    pub start: String,

    /// Last day of the export range (YYYY-MM-DD, inclusive of the whole day)
    #[arg(
        long = "end",
        value_name = "DATE",
        help = "Last day of the export range (YYYY-MM-DD, inclusive)"
    )]
    pub end: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl BatchArgs {
    /// Resolve `--start`/`--end` into an inclusive datetime range.
    ///
    /// `start` becomes the beginning of its day and `end` the last second of
    /// its day, so the whole final day is inside the range.
    pub fn date_range(&self) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let start = parse_cli_date(&self.start)?;
        let end = parse_cli_date(&self.end)?;

        if start > end {
            return Err(Error::invalid_date_range(format!(
                "start {} is after end {}",
                self.start, self.end
            )));
        }

        let start_of_day = start.and_hms_opt(0, 0, 0).ok_or_else(|| {
            Error::invalid_date_range(format!("'{}' has no valid start of day", self.start))
        })?;
        let end_of_day = end.and_hms_opt(23, 59, 59).ok_or_else(|| {
            Error::invalid_date_range(format!("'{}' has no valid end of day", self.end))
        })?;

        Ok((start_of_day, end_of_day))
    }

    /// Logging level string for the tracing filter
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl InteractiveArgs {
    /// Logging level string for the tracing filter
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn parse_cli_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, CLI_DATE_FORMAT).map_err(|_| {
        Error::invalid_date_range(format!("'{value}' does not match YYYY-MM-DD"))
    })
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
