//! Top-level error types for the pack CLI.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the CLI and config loading
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Option construction and pack planning errors
    #[error("Pack error: {0}")]
    Pack(#[from] crate::pack::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BundlerError::Cli(CliError::MissingArgument { argument }) => vec![format!(
                "Pass --{argument} or set it in {}",
                crate::metadata::DEFAULT_CONFIG_FILE
            )],
            BundlerError::Pack(crate::pack::Error::EntryAmbiguous(_)) => {
                vec!["Pass --main-exe to choose the entry executable".to_string()]
            }
            BundlerError::Pack(crate::pack::Error::Validation(_)) => {
                vec!["Fix the configuration problems listed above and re-run".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
