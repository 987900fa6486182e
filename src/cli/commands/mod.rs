//! Command implementations for the scale2fit CLI
//!
//! This module contains the main command execution logic. Each command is
//! implemented in its own module:
//! - `interactive`: field and date-range selection through stdin prompts
//! - `batch`: unattended conversion with the default field set

pub mod batch;
pub mod interactive;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::ConversionStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for scale2fit
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<ConversionStats> {
    match args.get_command() {
        Commands::Interactive(interactive_args) => interactive::run_interactive(interactive_args),
        Commands::Batch(batch_args) => batch::run_batch(batch_args),
    }
}
