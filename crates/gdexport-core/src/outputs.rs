//! Outputs published to the next pipeline step.

use serde::{Deserialize, Serialize};

use crate::{OutputSlot, Platform};

/// Output name for the Windows compatibility layer flag.
pub const REQUIRE_WINE: &str = "require_wine";

/// Output name for the itch.io project identifier.
pub const ITCH_PROJECT: &str = "itch_project";

/// The full set of named outputs produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactOutputs {
    /// Set when any Windows preset was found.
    pub require_wine: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html5_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osx_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itch_project: Option<String>,
}

impl ArtifactOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an archive for a platform. A later call for the same
    /// platform replaces the earlier archive.
    pub fn record(&mut self, platform: Platform, archive: impl Into<String>) {
        *self.slot_mut(platform.slot()) = Some(archive.into());
        if platform.requires_wine() {
            self.require_wine = true;
        }
    }

    pub fn artifact(&self, slot: OutputSlot) -> Option<&str> {
        match slot {
            OutputSlot::Windows => self.windows_artifact.as_deref(),
            OutputSlot::Html5 => self.html5_artifact.as_deref(),
            OutputSlot::Osx => self.osx_artifact.as_deref(),
            OutputSlot::Linux => self.linux_artifact.as_deref(),
            OutputSlot::Android => self.android_artifact.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: OutputSlot) -> &mut Option<String> {
        match slot {
            OutputSlot::Windows => &mut self.windows_artifact,
            OutputSlot::Html5 => &mut self.html5_artifact,
            OutputSlot::Osx => &mut self.osx_artifact,
            OutputSlot::Linux => &mut self.linux_artifact,
            OutputSlot::Android => &mut self.android_artifact,
        }
    }

    /// Whether any platform slot holds an archive.
    pub fn has_artifacts(&self) -> bool {
        OutputSlot::ALL.iter().any(|s| self.artifact(*s).is_some())
    }

    /// Outputs in emission order: `require_wine` first, then every set
    /// slot, then `itch_project` if present.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![(REQUIRE_WINE, self.require_wine.to_string())];
        for slot in OutputSlot::ALL {
            if let Some(archive) = self.artifact(slot) {
                entries.push((slot.output_name(), archive.to_string()));
            }
        }
        if let Some(project) = &self.itch_project {
            entries.push((ITCH_PROJECT, project.clone()));
        }
        entries
    }
}
