use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a failed fetch from a bad invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the component report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, file I/O, formatting, etc.)
    ApplicationError = 3,
    /// The component list for the requested vessel could not be fetched
    FetchFailed = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::FetchFailed => write!(f, "Fetch Failed (4)"),
        }
    }
}

/// Application-specific errors for the component hierarchy engine.
///
/// Only `FetchFailure` ever reaches a session; the remaining variants come
/// from the adapters and the CLI.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Failed to fetch components for vessel '{vessel_id}'\nDetails: {details}\n\n💡 Hint: Check your network connection and retry")]
    FetchFailure { vessel_id: String, details: String },

    #[error("Component snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse component snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be a JSON array of component records")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nReason: {reason}\n\n💡 Hint: Fix the value in the config file or override it on the command line")]
    InvalidConfig { path: PathBuf, reason: String },

    /// Rejected user input such as a missing or unsafe vessel id
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl FleetError {
    /// Maps an error to the exit code the CLI should report for it
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FleetError::FetchFailure { .. } => ExitCode::FetchFailed,
            FleetError::Validation { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
