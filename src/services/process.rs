//! NuGet client invocation with whitelist validation
//!
//! Wraps the external package-manager executable behind the
//! [`ProcessExecutor`] trait. Only known NuGet client binaries may run,
//! arguments are passed as a vector (never interpolated into a shell
//! string), and the working directory is validated before execution.

use crate::core::error::ActionError;
use crate::core::traits::{ProcessExecutor, ProcessOutput};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Client binaries allowed to run.
///
/// `dotnet` covers `dotnet nuget`-style installations; `mono` covers
/// nuget.exe on non-Windows agents.
const ALLOWED_CLIENTS: &[&str] = &["nuget", "nuget.exe", "dotnet", "mono"];

/// Executor for the external NuGet command-line client
#[derive(Debug)]
pub struct NuGetExecutor {
    client: String,
    working_dir: PathBuf,
}

impl NuGetExecutor {
    /// Create an executor using the default `nuget` client.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Result<Self, ActionError> {
        Self::with_client(working_dir, "nuget")
    }

    /// Create an executor for a specific client binary.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::CommandNotAllowed` when the client is not in
    /// the whitelist, or `ActionError::InvalidWorkingDirectory` when the
    /// directory does not exist.
    pub fn with_client<P: AsRef<Path>>(working_dir: P, client: &str) -> Result<Self, ActionError> {
        if !ALLOWED_CLIENTS.contains(&client) {
            return Err(ActionError::CommandNotAllowed(client.to_string()));
        }

        let working_dir = working_dir.as_ref().to_path_buf();
        if !working_dir.is_dir() {
            return Err(ActionError::InvalidWorkingDirectory(working_dir));
        }

        Ok(Self {
            client: client.to_string(),
            working_dir,
        })
    }

    /// Name of the client binary this executor runs
    pub fn client(&self) -> &str {
        &self.client
    }
}

#[async_trait]
impl ProcessExecutor for NuGetExecutor {
    async fn run(&self, subcommand: &str, args: &[String]) -> Result<ProcessOutput, ActionError> {
        let output = Command::new(&self.client)
            .arg(subcommand)
            .args(args)
            .current_dir(&self.working_dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ActionError::ExecutionFailed(e.to_string()))?;

        Ok(ProcessOutput {
            // Terminated-by-signal has no code; report -1
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
