pub mod actions;
pub mod core;
pub mod nuspec;
pub mod services;

pub use actions::{GenerateNuspecAction, NuGetImportTemplate, PushPackageAction};
pub use core::*;
pub use services::{LocalFileOperations, NuGetExecutor, TracingLogger};
