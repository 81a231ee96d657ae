//! .nuspec manifest rules and serialization

pub mod rules;
pub mod writer;

pub use rules::{metadata_advisories, missing_required_fields};
pub use writer::{NUSPEC_SCHEMA, write_manifest};
