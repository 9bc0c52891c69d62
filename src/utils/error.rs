use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("{} file not found", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to load links from {}: {source}", .path.display())]
    ConfigLoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command: {command}")]
    InvalidOperation { command: String },
}

impl OracleError {
    /// Extra guidance printed under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            OracleError::ConfigNotFound { path } => Some(format!(
                "Make sure the '{}' file exists in the current directory.",
                path.display()
            )),
            OracleError::ConfigInvalid { path, .. } => Some(format!(
                "The '{}' file contains invalid content. Please check its format.",
                path.display()
            )),
            OracleError::InvalidOperation { .. } => Some("use --help".to_string()),
            OracleError::ConfigLoadError { .. } | OracleError::WriteError { .. } => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OracleError::ConfigNotFound { path } => format!(
                "{} file not found. Please ensure it exists in the current directory.",
                path.display()
            ),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, OracleError>;
