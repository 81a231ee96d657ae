//! Error handling for NuGet action steps
//!
//! This module provides the error types shared by every action,
//! using the thiserror crate for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for action step execution
#[derive(Error, Debug)]
pub enum ActionError {
    // Validation errors
    #[error("[{action}] required configuration fields are missing")]
    ValidationFailed { action: String },

    // Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    // Manifest serialization errors
    #[error("failed to encode .nuspec manifest: {0}")]
    ManifestEncoding(String),

    // File operation errors
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process execution errors
    #[error("client '{0}' is not in the allowed whitelist")]
    CommandNotAllowed(String),

    #[error("working directory does not exist: {0}")]
    InvalidWorkingDirectory(PathBuf),

    #[error("command execution failed: {0}")]
    ExecutionFailed(String),

    #[error("{command} exited with status {code}")]
    ExitStatus { command: String, code: i32 },
}

impl ActionError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationFailed { .. } => "VALIDATION_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::ManifestEncoding(_) => "MANIFEST_ENCODING",
            Self::WriteFailed { .. } => "WRITE_FAILED",
            Self::CommandNotAllowed(_) => "COMMAND_NOT_ALLOWED",
            Self::InvalidWorkingDirectory(_) => "INVALID_WORKING_DIRECTORY",
            Self::ExecutionFailed(_) => "EXECUTION_FAILED",
            Self::ExitStatus { .. } => "EXIT_STATUS",
        }
    }

    /// Check whether this error was raised before any side effect occurred
    ///
    /// Validation and configuration errors halt the step before a file is
    /// written or a process is spawned.
    pub fn is_pre_execution(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed { .. }
                | Self::Config(_)
                | Self::CommandNotAllowed(_)
                | Self::InvalidWorkingDirectory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_error() {
        let error = ActionError::ValidationFailed {
            action: "Generate .nuspec File".to_string(),
        };

        assert_eq!(error.code(), "VALIDATION_FAILED");
        assert!(error.is_pre_execution());
        assert!(error.to_string().contains("Generate .nuspec File"));
    }

    #[test]
    fn test_exit_status_error() {
        let error = ActionError::ExitStatus {
            command: "nuget push".to_string(),
            code: 1,
        };

        assert_eq!(error.code(), "EXIT_STATUS");
        assert!(!error.is_pre_execution());
        let display = error.to_string();
        assert!(display.contains("nuget push"));
        assert!(display.contains('1'));
    }

    #[test]
    fn test_command_not_allowed_error() {
        let error = ActionError::CommandNotAllowed("rm".to_string());
        assert_eq!(error.code(), "COMMAND_NOT_ALLOWED");
        assert!(error.is_pre_execution());
    }

    #[test]
    fn test_write_failed_error() {
        let error = ActionError::WriteFailed {
            path: PathBuf::from("/tmp/out.nuspec"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(error.code(), "WRITE_FAILED");
        assert!(!error.is_pre_execution());
        assert!(error.to_string().contains("out.nuspec"));
    }

    #[test]
    fn test_manifest_encoding_error() {
        let error = ActionError::ManifestEncoding("buffer overflow".to_string());
        assert_eq!(error.code(), "MANIFEST_ENCODING");
        assert!(error.to_string().contains("buffer overflow"));
    }
}
