//! Project root resolution and the full collection pass.

use derive_more::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::ini::Document;
use crate::presets::{ExtractWarning, Extraction, extract_artifacts};
use crate::{ConfigError, ConfigResult};

pub const EXPORT_PRESETS_FILE: &str = "export_presets.cfg";
pub const PROJECT_FILE: &str = "project.godot";

pub const GLOBAL_SECTION: &str = "global";
pub const ITCH_PROJECT_KEY: &str = "itch_project";

/// Why no itch.io project could be published.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ItchLookup {
    #[display(
        "Unable to read '{}'. Set 'itch_project' in its [global] section to the itch.io project name to export to.",
        _0.display()
    )]
    MissingFile(PathBuf),
    #[display(
        "Unable to find 'itch_project' in 'project.godot'. Set 'itch_project'= the itch.io project name to export to."
    )]
    MissingKey,
}

/// Absolute locations of the files a run reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Resolve a (possibly relative) project root against the current directory.
    pub fn resolve(root: impl AsRef<Path>) -> ConfigResult<Self> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn export_presets(&self) -> PathBuf {
        self.root.join(EXPORT_PRESETS_FILE)
    }

    pub fn project_file(&self) -> PathBuf {
        self.root.join(PROJECT_FILE)
    }
}

/// Read and parse `export_presets.cfg`. Its absence is an error.
pub fn load_export_presets(paths: &ProjectPaths) -> ConfigResult<Document> {
    let path = paths.export_presets();
    if !path.is_file() {
        return Err(ConfigError::MissingExportPresets {
            root: paths.root().to_path_buf(),
        });
    }
    let text =
        std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
    Ok(Document::parse(&text))
}

/// The `itch_project` value from `[global]`, if set and non-empty.
pub fn itch_project(doc: &Document) -> Option<String> {
    doc.get(GLOBAL_SECTION, ITCH_PROJECT_KEY)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Look up the itch.io project in `project.godot`.
pub fn read_itch_project(paths: &ProjectPaths) -> Result<String, ItchLookup> {
    let path = paths.project_file();
    let text = std::fs::read_to_string(&path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "project file not readable");
        ItchLookup::MissingFile(path.clone())
    })?;
    itch_project(&Document::parse(&text)).ok_or(ItchLookup::MissingKey)
}

/// Run the whole pass for a project: presets first, then the itch project.
pub fn collect_outputs(paths: &ProjectPaths) -> ConfigResult<Extraction> {
    let doc = load_export_presets(paths)?;
    let mut extraction = extract_artifacts(&doc)?;

    match read_itch_project(paths) {
        Ok(project) => {
            info!("Itch project found: {project}");
            extraction.outputs.itch_project = Some(project);
        }
        Err(lookup) => {
            warn!("{lookup}");
            extraction
                .warnings
                .push(ExtractWarning::MissingItchProject(lookup));
        }
    }

    Ok(extraction)
}
