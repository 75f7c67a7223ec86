//! Build manifest model for cog.
//!
//! Decodes `cog.yaml` into a [`PartialManifest`], fills in defaults to
//! produce a [`BuildManifest`], and validates the result.

pub mod error;
pub mod loader;
pub mod manifest;
pub mod validation;

pub use error::{Error, Result};
pub use loader::{load_manifest, load_manifest_from, parse_manifest};
pub use manifest::{
    AccessLevel, BuildConfig, BuildManifest, DEFAULT_LANGUAGE_VERSION, DEFAULT_NAMESPACE,
    Entrypoint, Metadata, Mode, PartialBuild, PartialManifest, PartialMetadata, PartialSpec,
    Requirement, RepoSpec, apply_defaults, decode, decode_format, unknown_keys,
};
pub use validation::{ValidationError, ValidationReason, validate};
