//! Error types for arbol-cli

use arbol::ArbolError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Malformed dataset, model or configuration file
    #[error("Invalid input: {0}")]
    InvalidFormat(String),

    /// Dataset or settings rejected before learning
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// An example does not fit the model
    #[error("Incompatible data: {0}")]
    Incompatible(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl CliError {
    /// Process status reported for this error
    pub(crate) fn status(&self) -> u8 {
        match self {
            Self::Logging(_) => 1,
            Self::FileNotFound(_) => 3,
            Self::InvalidFormat(_) => 4,
            Self::ValidationFailed(_) => 5,
            Self::Incompatible(_) => 6,
            Self::Io(_) => 7,
        }
    }

    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl From<ArbolError> for CliError {
    fn from(e: ArbolError) -> Self {
        match e {
            ArbolError::Io(err) => Self::Io(err),
            ArbolError::Format { .. } | ArbolError::Serialization(_) => {
                Self::InvalidFormat(e.to_string())
            }
            ArbolError::IncompatibleExample { .. } => Self::Incompatible(e.to_string()),
            ArbolError::Validation { .. }
            | ArbolError::InvalidHyperparameter { .. }
            | ArbolError::EmptyInput(_) => Self::ValidationFailed(e.to_string()),
        }
    }
}
