//! NuGet actions CLI
//!
//! Runs the NuGet action steps locally from a YAML actions document.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nuget_actions::{
    Action, ActionsConfig, ExecutionContext, GenerateNuspecAction, ImportConfig,
    LocalFileOperations, NuGetExecutor, NuGetImportTemplate, NuspecConfig, PushConfig,
    PushPackageAction, TracingLogger,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// NuGet packaging action steps
#[derive(Parser)]
#[command(name = "nuget-actions")]
#[command(version = "0.1.0")]
#[command(about = "Generate .nuspec manifests and publish NuGet packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .nuspec file from the actions document
    Nuspec {
        /// Path to the YAML actions document
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Working directory for resolved paths (defaults to current directory)
        #[arg(short, long)]
        working_dir: Option<PathBuf>,
    },

    /// Publish a package to a NuGet feed
    Push {
        /// Path to the YAML actions document
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Working directory for the client process (defaults to current directory)
        #[arg(short, long)]
        working_dir: Option<PathBuf>,

        /// NuGet client binary (nuget, nuget.exe, dotnet, mono)
        #[arg(long, default_value = "nuget")]
        client: String,
    },

    /// Print the description of every action configured in the document
    Describe {
        /// Path to the YAML actions document
        #[arg(value_name = "CONFIG")]
        config: PathBuf,
    },

    /// Print the configuration schema of an action as JSON
    Schema {
        /// Action name (nuspec, push, import)
        #[arg(value_name = "ACTION")]
        action: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Nuspec {
            config,
            working_dir,
        } => {
            let document = ActionsConfig::load(&config).await?;
            let Some(nuspec) = document.nuspec else {
                bail!("{} does not configure a nuspec action", config.display());
            };
            let ctx = local_context(working_dir, "nuget")?;
            let action = GenerateNuspecAction::new(nuspec);
            run_action(&action, &ctx).await
        }
        Commands::Push {
            config,
            working_dir,
            client,
        } => {
            let document = ActionsConfig::load(&config).await?;
            let Some(push) = document.push else {
                bail!("{} does not configure a push action", config.display());
            };
            let ctx = local_context(working_dir, &client)?;
            let action = PushPackageAction::new(push);
            run_action(&action, &ctx).await
        }
        Commands::Describe { config } => {
            let document = ActionsConfig::load(&config).await?;
            describe_command(document)
        }
        Commands::Schema { action } => schema_command(&action),
    }
}

fn local_context(working_dir: Option<PathBuf>, client: &str) -> Result<ExecutionContext> {
    let working_dir = working_dir.unwrap_or_else(|| PathBuf::from("."));

    let file_ops = LocalFileOperations::new(&working_dir)
        .with_context(|| format!("invalid working directory {}", working_dir.display()))?;
    let executor = NuGetExecutor::with_client(&working_dir, client)?;

    Ok(ExecutionContext::new(
        Arc::new(file_ops),
        Arc::new(executor),
        Arc::new(TracingLogger),
    ))
}

async fn run_action(action: &dyn Action, ctx: &ExecutionContext) -> Result<i32> {
    println!("{}", action.describe());

    match action.execute(ctx).await {
        Ok(()) => {
            println!("{} completed.", action.name());
            Ok(0)
        }
        Err(e) => {
            eprintln!("{} failed: {} [{}]", action.name(), e, e.code());
            Ok(1)
        }
    }
}

fn describe_command(document: ActionsConfig) -> Result<i32> {
    let mut described = false;

    if let Some(nuspec) = document.nuspec {
        println!("{}", GenerateNuspecAction::new(nuspec).describe());
        described = true;
    }
    if let Some(push) = document.push {
        println!("{}", PushPackageAction::new(push).describe());
        described = true;
    }
    if let Some(import) = document.import {
        println!("{}", NuGetImportTemplate::new(import).describe());
        described = true;
    }

    if !described {
        eprintln!("no actions configured");
        return Ok(1);
    }
    Ok(0)
}

fn schema_command(action: &str) -> Result<i32> {
    let schema = match action {
        "nuspec" => NuspecConfig::field_schema(),
        "push" => PushConfig::field_schema(),
        "import" => ImportConfig::field_schema(),
        other => bail!("unknown action '{other}' (expected nuspec, push, or import)"),
    };

    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(0)
}
