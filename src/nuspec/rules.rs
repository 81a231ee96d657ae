//! Validation rules for .nuspec metadata
//!
//! Required-field checks gate generation outright. Advisory checks
//! (package id shape, SemVer) are logged but never block, so a manifest
//! the feed would accept is never rejected here.

use crate::core::config::NuspecConfig;
use crate::core::traits::FieldIssue;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NuGet package ids: letters, digits, dots, hyphens, underscores,
    // starting with a letter or digit.
    static ref PACKAGE_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap();
}

/// Maximum package id length accepted by nuget.org
const MAX_PACKAGE_ID_LENGTH: usize = 100;

/// Check the four required manifest fields.
///
/// Returns one issue per missing field; an empty result means generation
/// may proceed.
pub fn missing_required_fields(config: &NuspecConfig) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if config.id.is_empty() {
        issues.push(FieldIssue::new("id", "Id is required"));
    }
    if config.version.is_empty() {
        issues.push(FieldIssue::new("version", "Version is required"));
    }
    if config.authors.is_empty() {
        issues.push(FieldIssue::new("authors", "At least one author is required"));
    }
    if config.description.is_empty() {
        issues.push(FieldIssue::new("description", "Description is required"));
    }

    issues
}

/// Non-blocking advisories about metadata quality.
pub fn metadata_advisories(config: &NuspecConfig) -> Vec<FieldIssue> {
    let mut advisories = Vec::new();

    if !config.id.is_empty() {
        if config.id.len() > MAX_PACKAGE_ID_LENGTH {
            advisories.push(FieldIssue::new(
                "id",
                format!(
                    "package id exceeds {} characters and may be rejected by the feed",
                    MAX_PACKAGE_ID_LENGTH
                ),
            ));
        }
        if !PACKAGE_ID_RE.is_match(&config.id) {
            advisories.push(FieldIssue::new(
                "id",
                "package id contains characters outside letters, digits, '.', '_', '-'",
            ));
        }
    }

    if !config.version.is_empty() && semver::Version::parse(&config.version).is_err() {
        advisories.push(FieldIssue::new(
            "version",
            format!("'{}' is not a SemVer version", config.version),
        ));
    }

    advisories
}
