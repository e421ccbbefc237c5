//! Resolve CLI flags and config into a conversion run

use std::path::Path;
use std::time::Instant;

use jsontocsv_core::bail_usage;
use jsontocsv_core::config::ConvertConfig;
use jsontocsv_core::error::Result;
use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use crate::commands::convert::{self, ConvertOptions};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path();
    let config = ConvertConfig::discover(cli.config.as_deref(), &root)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let options = resolve_options(cli, config)?;
    convert::execute(cli, &options, start)
}

/// Flags win over config; config wins over built-in defaults
fn resolve_options(cli: &Cli, config: ConvertConfig) -> Result<ConvertOptions> {
    let output = cli.output.clone().unwrap_or(config.output);
    if output.as_os_str().is_empty() {
        bail_usage!("output path must not be empty");
    }

    let input = cli.input.clone().or(config.input).filter(|p| !is_stdin(p));

    Ok(ConvertOptions { input, output })
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
