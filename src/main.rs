// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use selenium_report::storage::{self, Summary};
use selenium_report::utils::{logging, AppError};
use selenium_report::{Listener, ParseConfig, ReportParser, StrictOptions, TracingListener};

/// Command Line Interface for Selenium HTML report parsing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report file names, relative to the reports directory
    #[arg(required = true)]
    files: Vec<String>,

    /// Directory holding the reports
    #[arg(short, long, default_value = ".")]
    reports_dir: PathBuf,

    /// Write a JSON summary of all parsed reports to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject DOCTYPE declarations in structured reports
    #[arg(long)]
    no_dtd: bool,

    /// Maximum number of nodes the strict reader accepts
    #[arg(long)]
    nodes_limit: Option<u32>,

    /// Do not echo per-report diagnostic lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting processing for args: {:?}", args);

    if !args.reports_dir.is_dir() {
        return Err(AppError::Config(format!(
            "Reports directory {} does not exist",
            args.reports_dir.display()
        )));
    }

    // 3. Build the parser from the command-line options
    let mut strict = StrictOptions::default();
    strict.allow_dtd = !args.no_dtd;
    if let Some(limit) = args.nodes_limit {
        strict.nodes_limit = limit;
    }
    let parser = ReportParser::new(ParseConfig { strict });
    let listener = TracingListener;
    let listener: Option<&dyn Listener> = if args.quiet { None } else { Some(&listener) };

    // 4. Parse each report in turn
    let mut records = Vec::new();
    let mut failure_count = 0;
    for file in &args.files {
        match parser.parse_in(&args.reports_dir, file, listener) {
            Ok(record) => {
                tracing::info!(
                    "{}: {} | tests {}/{} passed | commands {} passed, {} failed, {} errors | time {}",
                    record.source_file_name(),
                    record.status(),
                    record.test_pass_count(),
                    record.test_total(),
                    record.command_pass_count(),
                    record.command_fail_count(),
                    record.command_error_count(),
                    record.total_time(),
                );
                records.push(record);
            }
            Err(e) => {
                tracing::error!("Failed to parse {}: {}", file, e);
                failure_count += 1;
            }
        }
    }

    tracing::info!("Processing finished. Success: {}, Failures: {}", records.len(), failure_count);

    if records.is_empty() {
        return Err(AppError::Processing(format!("Failed to parse any of {} reports", failure_count)));
    }

    // 5. Save the summary if requested
    if let Some(output) = &args.output {
        storage::write_summary(output, &Summary::new(records))?;
    }

    Ok(())
}
