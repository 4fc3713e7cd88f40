//! @ai:module:intent CLI entry point for the annotator
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on scanner, output, logging, config

use annotator_parser::{
    format_elapsed, init_logging, output, scan_directory, Error, LogLevel, ParseConfig,
};
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "annotator")]
#[command(about = "Annotator scans OpenEdge 4GL class files for annotations")]
#[command(
    long_about = "Annotator recursively scans directories for .cls files and extracts annotations in JSON format."
)]
struct Cli {
    /// Print the version number
    #[arg(short = 'v', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse .cls files for annotations
    #[command(long_about = "Recursively scan a directory for .cls files and extract annotations.")]
    Parse {
        /// Directory to scan
        directory: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = annotator_parser::config::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Output to stdout
        #[arg(long)]
        stdout: bool,

        /// Compact JSON output
        #[arg(long)]
        compact: bool,

        /// Log level (none, error, info, debug, trace)
        #[arg(short = 'l', long = "loglevel", default_value = "info")]
        log_level: String,

        /// Log to console instead of file
        #[arg(long = "logtoconsole")]
        log_to_console: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match cli.command {
        Some(Commands::Parse {
            directory,
            output,
            stdout,
            compact,
            log_level,
            log_to_console,
        }) => {
            let config = ParseConfig {
                output,
                stdout,
                compact,
                log_level: LogLevel::parse_lenient(&log_level),
                log_to_console,
                ..ParseConfig::new(directory)
            };

            match run_parse(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    ExitCode::from(e.exit_code())
                }
            }
        }
        None => {
            // Printing help only fails if stdout is gone.
            let _ = Cli::command().print_help();
            ExitCode::SUCCESS
        }
    }
}

fn run_parse(config: &ParseConfig) -> Result<(), Error> {
    let started = Instant::now();
    init_logging(config.log_level, &config.log_destination())?;

    let index = scan_directory(&config.directory)?;

    let rendered = output::render(&index, config.output_format())?;
    if let Err(e) = output::write_output(&rendered, &config.output_target()) {
        tracing::error!(error = %e, "Error writing output");
        return Err(e);
    }

    tracing::info!(elapsed = %format_elapsed(started.elapsed()), "Done");
    Ok(())
}
