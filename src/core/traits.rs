//! Core traits and types for NuGet action steps
//!
//! This module defines the abstractions an action depends on at run time:
//! the file-operations service, the process-execution service, and the
//! logging service. All of them are owned by the orchestrating host and
//! injected through an [`ExecutionContext`], so actions stay declarative
//! and tests never touch real agents.

use crate::core::error::ActionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// ============================================================================
// Validation
// ============================================================================

/// A single problem reported against a configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// File Operations Service
// ============================================================================

/// File-operations collaborator owned by the host agent
///
/// Actions never open files themselves; they hand a byte buffer to this
/// service at a path resolved against the step's working directory.
#[async_trait]
pub trait FileOperations: Send + Sync {
    /// Resolve a user-configured relative file name against the working
    /// directory of the current execution.
    fn resolve_working_path(&self, relative: &str) -> PathBuf;

    /// Write the full byte buffer to the given path.
    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), ActionError>;
}

// ============================================================================
// Process Execution Service
// ============================================================================

/// Captured result of an external client invocation
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Process-execution collaborator wrapping the external NuGet client
///
/// The argument vector is the sole contract with the tool; no output
/// parsing happens on this side.
#[async_trait]
pub trait ProcessExecutor: Send + Sync {
    /// Run the client with the given subcommand and arguments.
    async fn run(&self, subcommand: &str, args: &[String]) -> Result<ProcessOutput, ActionError>;
}

// ============================================================================
// Logging Service
// ============================================================================

/// Logging collaborator for step-scoped messages
pub trait Logger: Send + Sync {
    fn log_error(&self, message: &str);
    fn log_information(&self, message: &str);
    fn log_debug(&self, message: &str);
}

// ============================================================================
// Execution Context
// ============================================================================

/// Services handed to an action for a single invocation
#[derive(Clone)]
pub struct ExecutionContext {
    pub file_ops: Arc<dyn FileOperations>,
    pub executor: Arc<dyn ProcessExecutor>,
    pub logger: Arc<dyn Logger>,
}

impl ExecutionContext {
    pub fn new(
        file_ops: Arc<dyn FileOperations>,
        executor: Arc<dyn ProcessExecutor>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            file_ops,
            executor,
            logger,
        }
    }
}

// ============================================================================
// Action Trait
// ============================================================================

/// A single configured unit of work executed by the orchestration host
///
/// Every action is a linear validate -> act -> report sequence. There are no
/// retries and no intermediate states; an `Err` means the step reported
/// failure and stopped.
#[async_trait]
pub trait Action: Send + Sync {
    /// Display name of the action (host UI surface)
    fn name(&self) -> &str;

    /// One-line human-readable description assembled from the configuration
    fn describe(&self) -> String;

    /// Run the action once against the injected services.
    async fn execute(&self, ctx: &ExecutionContext) -> Result<(), ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_issue_creation() {
        let issue = FieldIssue::new("id", "Id is required");
        assert_eq!(issue.field, "id");
        assert_eq!(issue.message, "Id is required");
    }

    #[test]
    fn test_field_issue_serialization() {
        let issue = FieldIssue::new("version", "Version is required");
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"field\":\"version\""));

        let deserialized: FieldIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, issue);
    }

    #[test]
    fn test_process_output_success() {
        let output = ProcessOutput {
            exit_code: 0,
            stdout: "pushed".to_string(),
            stderr: String::new(),
        };
        assert!(output.success());
    }

    #[test]
    fn test_process_output_failure() {
        let output = ProcessOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: "403 Forbidden".to_string(),
        };
        assert!(!output.success());
    }
}
