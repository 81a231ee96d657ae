//! Explicit configuration schemas for the host editor surface
//!
//! The original host discovered persisted fields through reflection over
//! attribute-decorated properties. Here each action declares its schema as
//! plain data: field name, kind, required flag, and default value. The host
//! UI and the `describe` CLI subcommand consume these without touching the
//! action types themselves.

use crate::core::config::{ImportConfig, NuspecConfig, PushConfig};
use serde::Serialize;

/// Value kind of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    TextList,
    Flag,
    Secret,
}

/// One named, typed field in an action's configuration schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    const fn with_default(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: Some(default),
        }
    }
}

impl NuspecConfig {
    /// Schema of the "Generate .nuspec File" configuration
    pub fn field_schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("outputFileName", FieldKind::Text),
            FieldSpec::required("id", FieldKind::Text),
            // The host substitutes its release number variable by default
            FieldSpec::with_default("version", FieldKind::Text, "$ReleaseNumber"),
            FieldSpec::optional("title", FieldKind::Text),
            FieldSpec::required("authors", FieldKind::TextList),
            FieldSpec::required("description", FieldKind::Text),
            FieldSpec::optional("summary", FieldKind::Text),
            FieldSpec::optional("language", FieldKind::Text),
            FieldSpec::optional("projectUrl", FieldKind::Text),
            FieldSpec::optional("iconUrl", FieldKind::Text),
            FieldSpec::optional("licenseUrl", FieldKind::Text),
            FieldSpec::optional("copyright", FieldKind::Text),
            FieldSpec::optional("requireLicenseAcceptance", FieldKind::Flag),
            FieldSpec::optional("dependencies", FieldKind::TextList),
            FieldSpec::optional("frameworkDependencies", FieldKind::TextList),
            FieldSpec::optional("tags", FieldKind::Text),
        ]
    }
}

impl PushConfig {
    /// Schema of the "Publish NuGet Package" configuration
    pub fn field_schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("packagePath", FieldKind::Text),
            FieldSpec::optional("apiKey", FieldKind::Secret),
            FieldSpec::optional("serverUrl", FieldKind::Text),
        ]
    }
}

impl ImportConfig {
    /// Schema of the "Import NuGet Package" build-importer template
    pub fn field_schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("packageId", FieldKind::Text),
            FieldSpec::optional("packageVersion", FieldKind::Text),
            FieldSpec::optional("packageSource", FieldKind::Text),
            FieldSpec::optional("includePrerelease", FieldKind::Flag),
            FieldSpec::optional("versionLocked", FieldKind::Flag),
            FieldSpec::optional("additionalArguments", FieldKind::Text),
            FieldSpec::optional("captureIdAndVersion", FieldKind::Flag),
            FieldSpec::optional("packageArtifactRoot", FieldKind::Text),
            FieldSpec::optional("includeVersionInArtifactName", FieldKind::Flag),
        ]
    }
}
