//! CLI argument parsing for jsontocsv
//!
//! Uses clap for argument parsing. The tool has no subcommands: it reads one
//! input document and writes one CSV file.

pub mod output;
pub mod paths;

use std::path::PathBuf;

use clap::Parser;

pub use output::OutputFormat;

/// Convert an ESCO record dump (`{"data": [...]}`) to an `esco_uri,data` CSV
#[derive(Parser, Debug)]
#[command(name = "jsontocsv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input JSON document (`-` for stdin; defaults to config `input`, then stdin)
    pub input: Option<PathBuf>,

    /// Output CSV path (`-` for stdout; defaults to config `output`, then ammattiryhma.csv)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./jsontocsv.toml when present)
    #[arg(long, env = "JSONTOCSV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Completion report format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log filter (e.g. `info`, `jsontocsv_core=trace`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}
