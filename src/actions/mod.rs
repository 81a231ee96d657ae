//! The NuGet action steps

pub mod generate_nuspec;
pub mod import_template;
pub mod push_package;

pub use generate_nuspec::GenerateNuspecAction;
pub use import_template::NuGetImportTemplate;
pub use push_package::PushPackageAction;
