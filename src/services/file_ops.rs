//! Local file-operations service
//!
//! Stand-in for the host agent's remote file service when actions run
//! against the local machine (CLI use). Paths resolve against a working
//! directory validated at construction.

use crate::core::error::ActionError;
use crate::core::traits::FileOperations;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File operations rooted at a working directory
#[derive(Debug)]
pub struct LocalFileOperations {
    working_dir: PathBuf,
}

impl LocalFileOperations {
    /// Create a service rooted at `working_dir`. The directory must exist.
    pub fn new<P: AsRef<Path>>(working_dir: P) -> Result<Self, ActionError> {
        let working_dir = working_dir.as_ref().to_path_buf();

        if !working_dir.is_dir() {
            return Err(ActionError::InvalidWorkingDirectory(working_dir));
        }

        Ok(Self { working_dir })
    }
}

#[async_trait]
impl FileOperations for LocalFileOperations {
    fn resolve_working_path(&self, relative: &str) -> PathBuf {
        let candidate = Path::new(relative);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.working_dir.join(candidate)
        }
    }

    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), ActionError> {
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| ActionError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}
