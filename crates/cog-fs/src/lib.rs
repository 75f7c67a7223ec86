//! Filesystem layer for cog manifests
//!
//! Provides format-agnostic config decoding, bounded text reads, and the
//! startup step that aliases a legacy manifest to the canonical filename.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;

pub use bootstrap::{BootstrapOutcome, alias_legacy_manifest};
pub use config::{ConfigFormat, ConfigStore};
pub use constants::ManifestFile;
pub use error::{Error, Result};
