//! "Generate .nuspec File" action
//!
//! Validates the configured metadata, serializes it to the fixed-schema
//! manifest document, and hands the bytes to the file-operations service.
//! On validation failure the step logs each missing field and stops before
//! any file is written.

use crate::core::config::NuspecConfig;
use crate::core::error::ActionError;
use crate::core::traits::{Action, ExecutionContext};
use crate::nuspec::{metadata_advisories, missing_required_fields, write_manifest};
use async_trait::async_trait;

const ACTION_NAME: &str = "Generate .nuspec File";

/// Writes a new NuGet .nuspec file suitable for use in creating a package.
#[derive(Debug, Clone)]
pub struct GenerateNuspecAction {
    config: NuspecConfig,
}

impl GenerateNuspecAction {
    pub fn new(config: NuspecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NuspecConfig {
        &self.config
    }
}

#[async_trait]
impl Action for GenerateNuspecAction {
    fn name(&self) -> &str {
        ACTION_NAME
    }

    fn describe(&self) -> String {
        format!(
            "Generate {} for {}.{}",
            self.config.output_file_name, self.config.id, self.config.version
        )
    }

    async fn execute(&self, ctx: &ExecutionContext) -> Result<(), ActionError> {
        let missing = missing_required_fields(&self.config);
        if !missing.is_empty() {
            ctx.logger
                .log_error("Id, Version, Authors, and Description are required.");
            for issue in &missing {
                ctx.logger
                    .log_error(&format!("  {}: {}", issue.field, issue.message));
            }
            return Err(ActionError::ValidationFailed {
                action: ACTION_NAME.to_string(),
            });
        }

        for advisory in metadata_advisories(&self.config) {
            ctx.logger
                .log_information(&format!("{}: {}", advisory.field, advisory.message));
        }

        ctx.logger.log_debug("Generating .nuspec file...");
        let bytes = write_manifest(&self.config)?;

        let file_name = ctx
            .file_ops
            .resolve_working_path(&self.config.output_file_name);
        ctx.logger
            .log_information(&format!("Writing {}...", file_name.display()));
        ctx.file_ops.write_file(&file_name, &bytes).await
    }
}
