//! "Import NuGet Package" build-importer template
//!
//! Pure configuration record: the host's import mechanism performs the
//! actual download and artifact registration. This side only exposes the
//! configuration schema and a human-readable description.

use crate::core::config::ImportConfig;

/// Imports a NuGet package from a feed as a build artifact.
#[derive(Debug, Clone, Default)]
pub struct NuGetImportTemplate {
    config: ImportConfig,
}

impl NuGetImportTemplate {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Human-readable summary of the configured import
    pub fn describe(&self) -> String {
        describe(&self.config)
    }
}

/// Assemble the import description from whichever fields are set.
pub fn describe(config: &ImportConfig) -> String {
    let mut description = format!("Import NuGet package {}", config.package_id);

    if !config.package_version.is_empty() {
        description.push(' ');
        description.push_str(&config.package_version);
    }

    description.push_str(" from ");
    if config.package_source.is_empty() {
        description.push_str("default package source");
    } else {
        description.push_str(&config.package_source);
    }

    if config.capture_id_and_version {
        description.push_str(" and set $ImportedPackageId and $ImportedPackageVersion build variables");
    }

    description
}
