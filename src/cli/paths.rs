//! Path resolution utilities for the CLI

use std::env;
use std::path::PathBuf;

/// Directory searched for `jsontocsv.toml`.
///
/// Falls back to "." if the current directory cannot be determined.
pub fn resolve_root_path() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
