//! Legacy manifest aliasing
//!
//! Projects that still ship `catalog-info.yaml` get a `cog.yaml` hard link
//! pointing at the same file, so every loader only has to know the
//! canonical name. Runs once at process start; an `Err` should abort startup.

use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, ManifestFile, Result, io};

/// What [`alias_legacy_manifest`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The canonical manifest was created as a link to the legacy one
    Aliased,
    /// A canonical manifest was already present; nothing changed
    CanonicalExists,
    /// No legacy manifest in the directory; nothing changed
    NoLegacy,
}

/// Alias `dir/catalog-info.yaml` to `dir/cog.yaml` if the former exists.
pub fn alias_legacy_manifest(dir: &Path) -> Result<BootstrapOutcome> {
    let legacy = dir.join(ManifestFile::Legacy);
    let canonical = dir.join(ManifestFile::Canonical);

    if !legacy.is_file() {
        return Ok(BootstrapOutcome::NoLegacy);
    }

    match io::hard_link(&legacy, &canonical) {
        Ok(()) => {
            tracing::info!(
                legacy = %legacy.display(),
                canonical = %canonical.display(),
                "aliased legacy manifest"
            );
            Ok(BootstrapOutcome::Aliased)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %canonical.display(), "canonical manifest already present");
            Ok(BootstrapOutcome::CanonicalExists)
        }
        Err(e) => Err(Error::io(canonical, e)),
    }
}
