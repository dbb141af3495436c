//! Core domain types for gdexport.
//!
//! This crate contains:
//! - Export platforms and the output slot each one feeds
//! - Archive name derivation for exported presets
//! - The set of outputs handed to the next pipeline step

pub mod artifact;
pub mod error;
pub mod outputs;
pub mod platform;

pub use artifact::archive_name;
pub use error::{Error, Result};
pub use outputs::ArtifactOutputs;
pub use platform::{OutputSlot, Platform};
