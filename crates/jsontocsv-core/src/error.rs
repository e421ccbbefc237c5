//! Error types and exit codes for jsontocsv
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization, unwritable destination)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid input document, invalid config)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - input document or config could not be used (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while converting records
#[derive(Error, Debug)]
pub enum ConvertError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ConvertError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ConvertError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an input document that cannot be converted
    pub fn invalid_input(reason: impl std::fmt::Display) -> Self {
        ConvertError::InvalidInput {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ConvertError::UsageError(_) => ExitCode::Usage,

            ConvertError::InvalidInput { .. } | ConvertError::Toml(_) => ExitCode::Data,

            ConvertError::Io(_)
            | ConvertError::Json(_)
            | ConvertError::FailedOperationWithTarget { .. }
            | ConvertError::Other(_) => ExitCode::Failure,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ConvertError::UsageError(_) => "usage_error",
            ConvertError::InvalidInput { .. } => "invalid_input",
            ConvertError::Toml(_) => "toml_error",
            ConvertError::Io(_) => "io_error",
            ConvertError::Json(_) => "json_error",
            ConvertError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ConvertError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for jsontocsv operations
pub type Result<T> = std::result::Result<T, ConvertError>;
