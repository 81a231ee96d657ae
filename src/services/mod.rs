//! Production implementations of the injected host services

pub mod file_ops;
pub mod logger;
pub mod process;

#[cfg(test)]
pub mod testing;

pub use file_ops::LocalFileOperations;
pub use logger::TracingLogger;
pub use process::NuGetExecutor;
