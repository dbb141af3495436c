//! Error types for gdexport.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
