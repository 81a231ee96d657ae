//! "Publish NuGet Package" action
//!
//! Assembles the fixed-order `push` argument list and delegates to the
//! process-execution service. Success is determined solely by the external
//! client's exit status; no output parsing happens here.

use crate::core::config::PushConfig;
use crate::core::error::ActionError;
use crate::core::traits::{Action, ExecutionContext};
use async_trait::async_trait;
use secrecy::ExposeSecret;

const ACTION_NAME: &str = "Publish NuGet Package";

/// Publishes a package to a NuGet feed using the external client.
#[derive(Debug)]
pub struct PushPackageAction {
    config: PushConfig,
}

impl PushPackageAction {
    pub fn new(config: PushConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PushConfig {
        &self.config
    }

    /// Build the argument list for `push`.
    ///
    /// Order is fixed and significant: quoted package path, quoted API key
    /// when present, `-source "<url>"` when present. Quoting is literal
    /// double-quote wrapping; embedded quotes are not escaped. That matches
    /// what downstream feeds have always received, so it is preserved as-is
    /// rather than fixed (see DESIGN.md).
    pub fn push_arguments(&self) -> Vec<String> {
        let mut args = vec![format!("\"{}\"", self.config.package_path)];

        if let Some(api_key) = &self.config.api_key {
            let key = api_key.expose_secret();
            if !key.is_empty() {
                args.push(format!("\"{}\"", key));
            }
        }

        if let Some(server_url) = &self.config.server_url
            && !server_url.is_empty()
        {
            args.push(format!("-source \"{}\"", server_url));
        }

        args
    }

    /// The same argument list with the API key replaced for log output.
    fn redacted_arguments(&self) -> Vec<String> {
        let mut args = self.push_arguments();
        if let Some(api_key) = &self.config.api_key
            && !api_key.expose_secret().is_empty()
        {
            args[1] = "\"****\"".to_string();
        }
        args
    }
}

#[async_trait]
impl Action for PushPackageAction {
    fn name(&self) -> &str {
        ACTION_NAME
    }

    fn describe(&self) -> String {
        format!("Publish {} to NuGet", self.config.package_path)
    }

    async fn execute(&self, ctx: &ExecutionContext) -> Result<(), ActionError> {
        let args = self.push_arguments();

        ctx.logger
            .log_debug(&format!("push {}", self.redacted_arguments().join(" ")));
        ctx.logger
            .log_information(&format!("Publishing {}...", self.config.package_path));

        let output = ctx.executor.run("push", &args).await?;

        if !output.success() {
            if !output.stderr.is_empty() {
                ctx.logger.log_error(output.stderr.trim_end());
            }
            return Err(ActionError::ExitStatus {
                command: "push".to_string(),
                code: output.exit_code,
            });
        }

        ctx.logger.log_information("Package published.");
        Ok(())
    }
}
