//! Artifact extraction from `export_presets.cfg`.

use derive_more::Display;
use gdexport_core::artifact::{archive_name, sanitize_name};
use gdexport_core::{ArtifactOutputs, Platform};
use tracing::{debug, info, warn};

use crate::ini::{Document, Section, SectionKey};
use crate::project::ItchLookup;
use crate::{ConfigError, ConfigResult};

pub const NAME_KEY: &str = "name";
pub const PLATFORM_KEY: &str = "platform";
pub const EXPORT_PATH_KEY: &str = "export_path";

/// Sections with this suffix hold a preset's options, not a preset.
pub const OPTIONS_SUFFIX: &str = ".options";

/// A non-fatal problem found while collecting outputs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ExtractWarning {
    #[display("No path set for preset '{preset}'. Skipping!")]
    MissingExportPath { preset: String },
    #[display("{_0}")]
    MissingItchProject(ItchLookup),
}

/// Result of a successful extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub outputs: ArtifactOutputs,
    pub warnings: Vec<ExtractWarning>,
}

/// An export preset: a named section that is not an options block.
#[derive(Debug, Clone, Copy)]
pub struct Preset<'a> {
    section: &'a str,
    fields: &'a Section,
}

impl<'a> Preset<'a> {
    /// Name of the section this preset was read from (e.g. `preset.0`).
    pub fn section(&self) -> &'a str {
        self.section
    }

    pub fn name(&self) -> Option<&'a str> {
        self.fields.get(NAME_KEY)
    }

    pub fn platform(&self) -> Option<&'a str> {
        self.fields.get(PLATFORM_KEY)
    }

    /// Export path, treating an empty value as unset.
    pub fn export_path(&self) -> Option<&'a str> {
        self.fields.get(EXPORT_PATH_KEY).filter(|p| !p.is_empty())
    }

    /// Whether the preset has an export path and will be published.
    pub fn is_configured(&self) -> bool {
        self.export_path().is_some()
    }

    /// Sanitized preset name for messages, falling back to the section name.
    pub fn display_name(&self) -> String {
        self.name()
            .map(sanitize_name)
            .unwrap_or_else(|| self.section.to_string())
    }

    fn require(&self, field: &'static str) -> ConfigResult<&'a str> {
        self.fields
            .get(field)
            .ok_or_else(|| ConfigError::MissingField {
                section: self.section.to_string(),
                field,
            })
    }
}

/// Iterate the presets of a document in file order.
pub fn presets(doc: &Document) -> impl Iterator<Item = Preset<'_>> {
    doc.sections().filter_map(|(key, fields)| match key {
        SectionKey::Named(section) if !section.ends_with(OPTIONS_SUFFIX) => {
            Some(Preset {
                section: section.as_str(),
                fields,
            })
        }
        _ => None,
    })
}

/// Map every configured preset to its platform's output slot.
///
/// Presets without an export path produce a warning and are skipped.
/// Unrecognized platforms are skipped without a warning. A configured
/// preset missing `name` or `platform` is an error.
pub fn extract_artifacts(doc: &Document) -> ConfigResult<Extraction> {
    let mut extraction = Extraction::default();

    let (configured, unconfigured): (Vec<_>, Vec<_>) =
        presets(doc).partition(|preset| preset.is_configured());

    for preset in unconfigured {
        let warning = ExtractWarning::MissingExportPath {
            preset: preset.display_name(),
        };
        warn!(section = preset.section(), "{warning}");
        extraction.warnings.push(warning);
    }

    for preset in configured {
        let name = preset.require(NAME_KEY)?;
        let label = preset.require(PLATFORM_KEY)?;
        let archive = archive_name(name);
        info!("Found {archive} on platform '{label}'");

        match label.parse::<Platform>() {
            Ok(platform) => extraction.outputs.record(platform, archive),
            Err(_) => debug!(section = preset.section(), label, "no output for platform"),
        }
    }

    Ok(extraction)
}
