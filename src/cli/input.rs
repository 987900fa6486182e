//! User input utilities for interactive CLI prompts
//!
//! This module provides the interactive selection collaborator: a field
//! picker over the exportable display names and a date-range picker over the
//! distinct timestamps present in the parsed records. Both produce plain
//! values; the conversion core never sees a prompt.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::app::models::WeightRecord;
use crate::app::services::scale_csv_parser::column_mapping;
use crate::constants::SCALE_DATETIME_FORMAT;
use crate::{Error, Result};

/// Display an interactive field selection menu and get the user's choice.
///
/// Returns the selected display field names in menu order; an empty vector
/// means "use the default export set".
pub fn prompt_field_selection() -> Result<Vec<String>> {
    let selectable = column_mapping::selectable_fields();

    println!("\nExportable fields:");
    for (i, (_, name)) in selectable.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
    println!();

    print!("Select fields to export (comma-separated numbers, empty for default set): ");
    let input = read_trimmed_line()?;

    // Empty input defers to the default field set downstream
    if input.is_empty() {
        return Ok(Vec::new());
    }

    if input == "all" {
        return Ok(selectable.iter().map(|(_, name)| name.to_string()).collect());
    }

    let mut selected = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        match part.parse::<usize>() {
            Ok(choice) if choice >= 1 && choice <= selectable.len() => {
                let name = selectable[choice - 1].1.to_string();
                if !selected.contains(&name) {
                    selected.push(name);
                }
            }
            _ => {
                return Err(Error::configuration(format!(
                    "Invalid selection '{}'. Please choose 1-{} or 'all'",
                    part,
                    selectable.len()
                )));
            }
        }
    }

    Ok(selected)
}

/// Display the distinct reading timestamps and let the user pick an
/// inclusive start/end pair.
pub fn prompt_date_range(records: &[WeightRecord]) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let mut timestamps: Vec<NaiveDateTime> = records.iter().map(|r| r.timestamp).collect();
    timestamps.sort();
    timestamps.dedup();

    if timestamps.is_empty() {
        return Err(Error::configuration(
            "No readings available for date selection".to_string(),
        ));
    }

    println!("\nReadings:");
    for (i, timestamp) in timestamps.iter().enumerate() {
        println!("  {}. {}", i + 1, timestamp.format(SCALE_DATETIME_FORMAT));
    }
    println!();

    let start = prompt_timestamp_choice("Export from", &timestamps, 1)?;
    let end = prompt_timestamp_choice("Export to", &timestamps, timestamps.len())?;

    if start > end {
        return Err(Error::configuration(format!(
            "Start reading {} is after end reading {}",
            start.format(SCALE_DATETIME_FORMAT),
            end.format(SCALE_DATETIME_FORMAT)
        )));
    }

    Ok((start, end))
}

fn prompt_timestamp_choice(
    label: &str,
    timestamps: &[NaiveDateTime],
    default: usize,
) -> Result<NaiveDateTime> {
    print!("{} reading [{}]: ", label, default);
    let input = read_trimmed_line()?;

    if input.is_empty() {
        return Ok(timestamps[default - 1]);
    }

    match input.parse::<usize>() {
        Ok(choice) if choice >= 1 && choice <= timestamps.len() => Ok(timestamps[choice - 1]),
        _ => Err(Error::configuration(format!(
            "Invalid selection '{}'. Please choose 1-{}",
            input,
            timestamps.len()
        ))),
    }
}

fn read_trimmed_line() -> Result<String> {
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(input.trim().to_string())
}
