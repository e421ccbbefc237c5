//! Converter configuration
//!
//! Configuration is optional and read from `jsontocsv.toml`. Only paths are
//! configurable; the CSV layout is fixed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "jsontocsv.toml";

/// Output file written when neither flags nor config name one
pub const DEFAULT_OUTPUT: &str = "ammattiryhma.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Destination for the CSV text (`-` for stdout)
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Input document used when no input is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            input: None,
        }
    }
}

impl ConvertConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConvertError::io_operation("read", path.display(), e))?;
        let config: ConvertConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config at `explicit`, or `jsontocsv.toml` under `dir` if it
    /// exists, or fall back to defaults
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConvertError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| ConvertError::io_operation("write", path.display(), e))?;
        Ok(())
    }
}
