//! Configuration structures for the NuGet actions
//!
//! Each action is configured by a plain serde struct. The host persists
//! these as named, typed fields; here they deserialize from a YAML document
//! with the same camelCase field names the original persisted schema used.
//!
//! Empty strings and absent fields mean the same thing everywhere: the
//! field was not configured, and the corresponding output element or
//! command-line argument is omitted entirely.

use crate::core::error::ActionError;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the "Generate .nuspec File" action
///
/// `id`, `version`, `authors` (at least one entry), and `description` must
/// be non-empty before a manifest is generated; everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NuspecConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output_file_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub license_url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub copyright: String,

    /// Emitted only when `license_url` is set
    #[serde(default)]
    pub require_license_acceptance: bool,

    /// Entries of the form `"id"` or `"id:version"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Framework assembly references, by assembly name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub framework_dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
}

/// Configuration for the "Publish NuGet Package" action
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfig {
    #[serde(default)]
    pub package_path: String,

    /// Feed API key. Held as a secret and redacted from all log output.
    #[serde(default)]
    pub api_key: Option<SecretString>,

    #[serde(default)]
    pub server_url: Option<String>,
}

/// Configuration record for the "Import NuGet Package" build importer
///
/// This is a pure description consumed by the host's import mechanism;
/// the crate exposes no execution logic for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_source: String,

    #[serde(default)]
    pub include_prerelease: bool,

    #[serde(default)]
    pub version_locked: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub additional_arguments: String,

    /// Capture the resolved id/version into host build variables
    #[serde(default)]
    pub capture_id_and_version: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_artifact_root: String,

    #[serde(default)]
    pub include_version_in_artifact_name: bool,
}

/// A YAML document configuring one or more actions
#[derive(Debug, Default, Deserialize)]
pub struct ActionsConfig {
    #[serde(default)]
    pub nuspec: Option<NuspecConfig>,

    #[serde(default)]
    pub push: Option<PushConfig>,

    #[serde(default)]
    pub import: Option<ImportConfig>,
}

impl ActionsConfig {
    /// Load an actions document from a YAML file.
    pub async fn load(path: &Path) -> Result<Self, ActionError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ActionError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parse an actions document from YAML text.
    pub fn parse(content: &str) -> Result<Self, ActionError> {
        serde_yaml::from_str(content).map_err(|e| ActionError::Config(e.to_string()))
    }
}
