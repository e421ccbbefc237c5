//! Output sink for rendered CSV text

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Path value that selects stdout instead of a file
pub const STDOUT_PATH: &str = "-";

/// Where the CSV text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink<'a> {
    File(&'a Path),
    Stdout,
}

impl<'a> Sink<'a> {
    pub fn from_path(path: &'a Path) -> Self {
        if path.as_os_str() == STDOUT_PATH {
            Sink::Stdout
        } else {
            Sink::File(path)
        }
    }

    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Sink::File(path) => write_csv(path, text),
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Write CSV text to `path` as UTF-8, replacing any existing file
pub fn write_csv(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| ConvertError::io_operation("write", path.display(), e))?;
    debug!(path = %path.display(), bytes = text.len(), "wrote csv");
    Ok(())
}
