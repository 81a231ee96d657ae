//! In-memory service doubles for action tests
//!
//! These let action tests assert on side effects (log lines, written
//! files, spawned commands) without a real filesystem layout or external
//! binaries.

use crate::core::error::ActionError;
use crate::core::traits::{FileOperations, Logger, ProcessExecutor, ProcessOutput};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Logger that records every message by level
#[derive(Debug, Default)]
pub struct MemoryLogger {
    pub errors: Mutex<Vec<String>>,
    pub information: Mutex<Vec<String>>,
    pub debug: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn information_lines(&self) -> Vec<String> {
        self.information.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn log_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log_information(&self, message: &str) {
        self.information.lock().unwrap().push(message.to_string());
    }

    fn log_debug(&self, message: &str) {
        self.debug.lock().unwrap().push(message.to_string());
    }
}

/// File operations that keep written files in memory
#[derive(Debug, Default)]
pub struct MemoryFileOperations {
    pub writes: Mutex<Vec<(PathBuf, Vec<u8>)>>,
}

impl MemoryFileOperations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn contents_of(&self, path: &Path) -> Option<Vec<u8>> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, bytes)| bytes.clone())
    }
}

#[async_trait]
impl FileOperations for MemoryFileOperations {
    fn resolve_working_path(&self, relative: &str) -> PathBuf {
        PathBuf::from("/work").join(relative)
    }

    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), ActionError> {
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), bytes.to_vec()));
        Ok(())
    }
}

/// Executor that records invocations and replies with a scripted exit code
#[derive(Debug)]
pub struct ScriptedExecutor {
    pub exit_code: i32,
    pub stderr: String,
    pub invocations: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedExecutor {
    pub fn succeeding() -> Self {
        Self {
            exit_code: 0,
            stderr: String::new(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self {
            exit_code,
            stderr: stderr.to_string(),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(String, Vec<String>)> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessExecutor for ScriptedExecutor {
    async fn run(&self, subcommand: &str, args: &[String]) -> Result<ProcessOutput, ActionError> {
        self.invocations
            .lock()
            .unwrap()
            .push((subcommand.to_string(), args.to_vec()));

        Ok(ProcessOutput {
            exit_code: self.exit_code,
            stdout: String::new(),
            stderr: self.stderr.clone(),
        })
    }
}
