//! Error types for cog-config

use std::path::PathBuf;

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] cog_fs::Error),

    #[error("Manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Manifest too large: {path} is {size} bytes (max {max})")]
    ManifestTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Malformed manifest: {message}")]
    Malformed { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid access level: {value}")]
    InvalidAccessLevel { value: String },

    #[error("Invalid mode: {mode}")]
    InvalidMode { mode: String },

    #[error("Can't run {mode}: '{mode}' option not found in manifest")]
    EntrypointNotSet { mode: crate::manifest::Mode },
}
