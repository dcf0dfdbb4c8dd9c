//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use pokedex_core::{CoreError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, signals).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// PokeAPI could not be reached or answered with an error.
    #[error("{0}")]
    Remote(String),

    /// An action reported failure through its status message.
    #[error("{0}")]
    Status(String),
}

impl CliError {
    /// Map error to a sysexits-style exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Remote(_) => 69,   // EX_UNAVAILABLE
            Self::Status(_) => 1,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::Repository(_) => Self::Database(err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg.clone()),
            // A fetch can also fail while saving the fetched row
            CoreError::Fetch { source, .. } if matches!(**source, CoreError::Repository(_)) => {
                Self::Database(err.to_string())
            }
            CoreError::Fetch { .. } | CoreError::Remote(_) => Self::Remote(err.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
