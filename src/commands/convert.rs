//! Convert command: read the input document, render CSV, write it out
//!
//! - Input: a file, or stdin when no path is resolved
//! - Output: a file (overwritten), or stdout for `-`
//! - The CSV text is fully rendered before the destination is touched

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use jsontocsv_core::csv::{convert_with_stats, ConversionStats};
use jsontocsv_core::error::Result;
use jsontocsv_core::record::RecordSet;
use jsontocsv_core::sink::Sink;
use jsontocsv_core::trace_time;
use tracing::info;

use crate::cli::{Cli, OutputFormat};

/// Resolved input and output for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// `None` reads stdin
    pub input: Option<PathBuf>,
    pub output: PathBuf,
}

/// Execute the convert command
pub fn execute(cli: &Cli, options: &ConvertOptions, start: Instant) -> Result<()> {
    let records = match &options.input {
        Some(path) => RecordSet::load(path)?,
        None => RecordSet::from_reader(io::stdin().lock())?,
    };

    info!(input_records = records.len(), "read records");
    trace_time!(start, "read_input");

    let conversion = convert_with_stats(records.records())?;

    info!(output_rows = conversion.stats.output_rows, "converted records");
    trace_time!(start, "convert");

    let sink = Sink::from_path(&options.output);
    sink.write(&conversion.text)?;

    trace_time!(start, "write_output");

    // CSV already went to stdout; keep it clean
    if sink == Sink::Stdout {
        return Ok(());
    }

    report(cli, options, &conversion.stats);
    Ok(())
}

fn report(cli: &Cli, options: &ConvertOptions, stats: &ConversionStats) {
    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("read {} records", stats.input_records);
                println!("wrote {} rows", stats.output_rows);
                println!("CSV file saved as {}", options.output.display());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "output": options.output.display().to_string(),
                "input_records": stats.input_records,
                "output_rows": stats.output_rows,
            });
            println!("{}", output);
        }
    }
}
