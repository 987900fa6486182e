use clap::Parser;
use scale2fit::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("scale2fit - Smart Scale Export Converter");
    println!("========================================");
    println!();
    println!("Convert smart-scale body composition CSV exports into Garmin-compatible");
    println!("FIT weight files.");
    println!();
    println!("USAGE:");
    println!("    scale2fit <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    interactive  Pick export fields and date range interactively");
    println!("    batch        Convert without prompts, using the default field set");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Interactively choose fields and dates:");
    println!("    scale2fit interactive --filename export.csv --output weight.fit");
    println!();
    println!("    # Export January with the default field set:");
    println!("    scale2fit batch --filename export.csv --output weight.fit \\");
    println!("                    --start 2025-01-01 --end 2025-01-31");
    println!();
    println!("For detailed help on any command, use:");
    println!("    scale2fit <COMMAND> --help");
}
