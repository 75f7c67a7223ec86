//! Reading manifests from disk
//!
//! The loader is the only part of this crate that touches the filesystem.
//! It expects any legacy manifest to have been aliased already
//! (see [`cog_fs::alias_legacy_manifest`]).

use std::io::ErrorKind;
use std::path::Path;

use cog_fs::{ConfigFormat, ConfigStore, ManifestFile, io};

use crate::manifest::{BuildManifest, PartialManifest, apply_defaults, decode, decode_format};
use crate::validation::validate;
use crate::{Error, Result};

/// Decode, default, and validate manifest YAML.
pub fn parse_manifest(raw: &str) -> Result<BuildManifest> {
    finish(decode(raw)?)
}

/// Load `root/cog.yaml`.
pub fn load_manifest(root: &Path) -> Result<BuildManifest> {
    load_manifest_from(&root.join(ManifestFile::Canonical))
}

/// Load a manifest from an explicit path; the format follows the extension.
pub fn load_manifest_from(path: &Path) -> Result<BuildManifest> {
    let format = ConfigFormat::from_path(path)?;
    let content =
        io::read_text_bounded(path, ConfigStore::new().max_size()).map_err(|e| match e {
            cog_fs::Error::Io { path, source } if source.kind() == ErrorKind::NotFound => {
                Error::ManifestNotFound { path }
            }
            cog_fs::Error::TooLarge { path, size, max } => {
                Error::ManifestTooLarge { path, size, max }
            }
            other => Error::Fs(other),
        })?;

    let partial = decode_format(&content, format)?;
    tracing::debug!(path = %path.display(), %format, "loaded manifest");
    finish(partial)
}

fn finish(partial: PartialManifest) -> Result<BuildManifest> {
    let manifest = apply_defaults(partial);
    validate(&manifest)?;
    Ok(manifest)
}
