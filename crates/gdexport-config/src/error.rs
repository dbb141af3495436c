//! Configuration parsing errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No export_presets.cfg found in {}. You must have at least one export defined via the Godot editor!",
        root.display()
    )]
    MissingExportPresets { root: PathBuf },

    #[error("preset '{section}' is missing required field: {field}")]
    MissingField { section: String, field: &'static str },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
