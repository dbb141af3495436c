//! Godot project file parsing for gdexport.
//!
//! This crate handles:
//! - The INI-style format shared by `export_presets.cfg` and `project.godot`
//! - Extracting per-platform archive names from export presets
//! - Looking up the itch.io project in the project descriptor

pub mod error;
pub mod ini;
pub mod presets;
pub mod project;

pub use error::{ConfigError, ConfigResult};
pub use ini::{Document, Section, SectionKey};
pub use presets::{ExtractWarning, Extraction, Preset, extract_artifacts};
pub use project::{ItchLookup, ProjectPaths, collect_outputs};
