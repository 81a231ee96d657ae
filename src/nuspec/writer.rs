//! .nuspec manifest serialization
//!
//! Produces the fixed-schema XML document consumed by NuGet packaging
//! tools. Element presence and ordering are a compatibility surface:
//! optional fields that are empty are omitted entirely rather than
//! emitted as empty elements.

use crate::core::config::NuspecConfig;
use crate::core::error::ActionError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Default namespace of every generated manifest
pub const NUSPEC_SCHEMA: &str = "http://schemas.microsoft.com/packaging/2010/07/nuspec.xsd";

fn encoding_error(e: impl std::fmt::Display) -> ActionError {
    ActionError::ManifestEncoding(e.to_string())
}

fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), ActionError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(encoding_error)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(encoding_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(encoding_error)?;
    Ok(())
}

fn optional_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), ActionError> {
    if !value.is_empty() {
        text_element(writer, name, value)?;
    }
    Ok(())
}

/// Serialize the manifest to XML bytes.
///
/// The caller must have checked the required fields beforehand; this
/// function only encodes. Metadata children appear in the fixed order the
/// schema consumers expect: the four required elements, the optional
/// descriptive elements, licensing, `dependencies`, `frameworkAssemblies`.
pub fn write_manifest(config: &NuspecConfig) -> Result<Vec<u8>, ActionError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(encoding_error)?;

    let mut package = BytesStart::new("package");
    package.push_attribute(("xmlns", NUSPEC_SCHEMA));
    writer
        .write_event(Event::Start(package))
        .map_err(encoding_error)?;
    writer
        .write_event(Event::Start(BytesStart::new("metadata")))
        .map_err(encoding_error)?;

    text_element(&mut writer, "id", &config.id)?;
    text_element(&mut writer, "version", &config.version)?;
    text_element(&mut writer, "authors", &config.authors.join(", "))?;
    text_element(&mut writer, "description", &config.description)?;

    optional_element(&mut writer, "title", &config.title)?;
    optional_element(&mut writer, "summary", &config.summary)?;
    optional_element(&mut writer, "language", &config.language)?;
    optional_element(&mut writer, "projectUrl", &config.project_url)?;
    optional_element(&mut writer, "iconUrl", &config.icon_url)?;

    if !config.license_url.is_empty() {
        text_element(&mut writer, "licenseUrl", &config.license_url)?;
        let accept = if config.require_license_acceptance {
            "true"
        } else {
            "false"
        };
        text_element(&mut writer, "requireLicenseAcceptance", accept)?;
    }

    optional_element(&mut writer, "copyright", &config.copyright)?;
    optional_element(&mut writer, "tags", &config.tags)?;

    if !config.dependencies.is_empty() {
        writer
            .write_event(Event::Start(BytesStart::new("dependencies")))
            .map_err(encoding_error)?;
        for entry in &config.dependencies {
            let (id, version) = match entry.split_once(':') {
                Some((id, version)) => (id, Some(version)),
                None => (entry.as_str(), None),
            };
            let mut dependency = BytesStart::new("dependency");
            dependency.push_attribute(("id", id));
            if let Some(version) = version
                && !version.is_empty()
            {
                dependency.push_attribute(("version", version));
            }
            writer
                .write_event(Event::Empty(dependency))
                .map_err(encoding_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("dependencies")))
            .map_err(encoding_error)?;
    }

    if !config.framework_dependencies.is_empty() {
        writer
            .write_event(Event::Start(BytesStart::new("frameworkAssemblies")))
            .map_err(encoding_error)?;
        for assembly in &config.framework_dependencies {
            let mut element = BytesStart::new("frameworkAssembly");
            element.push_attribute(("assemblyName", assembly.as_str()));
            writer
                .write_event(Event::Empty(element))
                .map_err(encoding_error)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new("frameworkAssemblies")))
            .map_err(encoding_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("metadata")))
        .map_err(encoding_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("package")))
        .map_err(encoding_error)?;

    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> NuspecConfig {
        NuspecConfig {
            output_file_name: "out.nuspec".to_string(),
            id: "MyPackage".to_string(),
            version: "1.0.0".to_string(),
            authors: vec!["Alice".to_string()],
            description: "A package".to_string(),
            ..Default::default()
        }
    }

    fn render(config: &NuspecConfig) -> String {
        String::from_utf8(write_manifest(config).unwrap()).unwrap()
    }

    #[test]
    fn test_minimal_manifest_has_only_required_elements() {
        let xml = render(&minimal_config());

        assert!(xml.contains(&format!("<package xmlns=\"{}\">", NUSPEC_SCHEMA)));
        assert!(xml.contains("<id>MyPackage</id>"));
        assert!(xml.contains("<version>1.0.0</version>"));
        assert!(xml.contains("<authors>Alice</authors>"));
        assert!(xml.contains("<description>A package</description>"));

        for absent in [
            "<title>",
            "<summary>",
            "<language>",
            "<projectUrl>",
            "<iconUrl>",
            "<licenseUrl>",
            "<requireLicenseAcceptance>",
            "<copyright>",
            "<tags>",
            "<dependencies>",
            "<frameworkAssemblies>",
        ] {
            assert!(!xml.contains(absent), "unexpected element {}", absent);
        }
    }

    #[test]
    fn test_required_element_order() {
        let xml = render(&minimal_config());
        let id = xml.find("<id>").unwrap();
        let version = xml.find("<version>").unwrap();
        let authors = xml.find("<authors>").unwrap();
        let description = xml.find("<description>").unwrap();
        assert!(id < version && version < authors && authors < description);
    }

    #[test]
    fn test_authors_joined_with_comma_space() {
        let mut config = minimal_config();
        config.authors = vec!["Alice".to_string(), "Bob".to_string()];
        let xml = render(&config);
        assert!(xml.contains("<authors>Alice, Bob</authors>"));
    }

    #[test]
    fn test_license_url_with_acceptance_false() {
        let mut config = minimal_config();
        config.license_url = "https://example.com/license".to_string();
        config.require_license_acceptance = false;
        let xml = render(&config);
        assert!(xml.contains(
            "<licenseUrl>https://example.com/license</licenseUrl>\
             <requireLicenseAcceptance>false</requireLicenseAcceptance>"
        ));
    }

    #[test]
    fn test_license_url_with_acceptance_true() {
        let mut config = minimal_config();
        config.license_url = "https://example.com/license".to_string();
        config.require_license_acceptance = true;
        let xml = render(&config);
        assert!(xml.contains("<requireLicenseAcceptance>true</requireLicenseAcceptance>"));
    }

    #[test]
    fn test_acceptance_flag_without_license_url_is_omitted() {
        let mut config = minimal_config();
        config.require_license_acceptance = true;
        let xml = render(&config);
        assert!(!xml.contains("requireLicenseAcceptance"));
    }

    #[test]
    fn test_dependency_with_version() {
        let mut config = minimal_config();
        config.dependencies = vec!["PackageA:1.2.0".to_string()];
        let xml = render(&config);
        assert!(xml.contains("<dependency id=\"PackageA\" version=\"1.2.0\"/>"));
    }

    #[test]
    fn test_dependency_without_version() {
        let mut config = minimal_config();
        config.dependencies = vec!["PackageB".to_string()];
        let xml = render(&config);
        assert!(xml.contains("<dependency id=\"PackageB\"/>"));
        assert!(!xml.contains("version=\"\""));
    }

    #[test]
    fn test_dependency_with_empty_version_segment() {
        let mut config = minimal_config();
        config.dependencies = vec!["PackageC:".to_string()];
        let xml = render(&config);
        assert!(xml.contains("<dependency id=\"PackageC\"/>"));
    }

    #[test]
    fn test_framework_assemblies() {
        let mut config = minimal_config();
        config.framework_dependencies =
            vec!["System.Net".to_string(), "System.Xml".to_string()];
        let xml = render(&config);
        assert!(xml.contains("<frameworkAssemblies>"));
        assert!(xml.contains("<frameworkAssembly assemblyName=\"System.Net\"/>"));
        assert!(xml.contains("<frameworkAssembly assemblyName=\"System.Xml\"/>"));
    }

    #[test]
    fn test_optional_descriptive_elements() {
        let mut config = minimal_config();
        config.title = "My Title".to_string();
        config.summary = "Short summary".to_string();
        config.language = "en-US".to_string();
        config.project_url = "https://example.com".to_string();
        config.icon_url = "https://example.com/icon.png".to_string();
        config.copyright = "Copyright 2015".to_string();
        config.tags = "web tools".to_string();

        let xml = render(&config);
        assert!(xml.contains("<title>My Title</title>"));
        assert!(xml.contains("<summary>Short summary</summary>"));
        assert!(xml.contains("<language>en-US</language>"));
        assert!(xml.contains("<projectUrl>https://example.com</projectUrl>"));
        assert!(xml.contains("<iconUrl>https://example.com/icon.png</iconUrl>"));
        assert!(xml.contains("<copyright>Copyright 2015</copyright>"));
        assert!(xml.contains("<tags>web tools</tags>"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut config = minimal_config();
        config.description = "Widgets & <gadgets>".to_string();
        let xml = render(&config);
        assert!(xml.contains("<description>Widgets &amp; &lt;gadgets&gt;</description>"));
    }

    #[test]
    fn test_declaration_and_root() {
        let xml = render(&minimal_config());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.ends_with("</metadata></package>"));
    }
}
