//! Trim command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::TrimArgs;
use podar::{FilterStats, SuppressionRules, TraceFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Execute the trim command
pub fn execute_trim(config: &CliConfig, args: &TrimArgs) -> CliResult<()> {
    let mut filter = TraceFilter::new(SuppressionRules::default());

    let input: Box<dyn BufRead> = match args.input {
        Some(ref path) => {
            let file = File::open(path).map_err(|e| {
                CliError::config(format!("Failed to open {}: {e}", path.display()))
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match args.output {
        Some(ref path) => {
            let file = File::create(path).map_err(|e| {
                CliError::config(format!("Failed to create {}: {e}", path.display()))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let stats = filter.process(input, output)?;

    if args.summary {
        print_summary_json(&stats)?;
    } else if config.verbosity.is_verbose() {
        print_summary_text(&stats);
    }

    Ok(())
}

/// Print run statistics as JSON to stderr (stdout stays a pure trace)
fn print_summary_json(stats: &FilterStats) -> CliResult<()> {
    let json = serde_json::to_string_pretty(stats)
        .map_err(|e| CliError::report_generation(format!("JSON serialization error: {e}")))?;
    eprintln!("{json}");
    Ok(())
}

/// Print a human-readable run summary to stderr
fn print_summary_text(stats: &FilterStats) {
    eprintln!(
        "Processed {} record(s) from {} source file(s)",
        stats.records_read, stats.files_loaded
    );
    eprintln!(
        "Suppressed {} record(s) ({} DA, {} BRDA)",
        stats.suppressed(),
        stats.lines_suppressed,
        stats.branches_suppressed
    );
}
