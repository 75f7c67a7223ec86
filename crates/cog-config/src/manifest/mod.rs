//! Build manifest schema - loaded from `cog.yaml`
//!
//! Decoding produces a [`PartialManifest`] where every optional field may be
//! absent. [`apply_defaults`] turns that into a [`BuildManifest`] exactly
//! once; [`crate::validate`] then checks the domain invariants.
//!
//! # Example YAML
//!
//! ```yaml
//! metadata:
//!   name: resnet
//!   description: Image classifier
//! spec:
//!   owner: ml-team@example.com
//!   access_level: PUBLIC
//! build:
//!   gpu: true
//!   system_packages:
//!     - libgl1-mesa-glx
//!   python_version: "3.10"
//!   python_packages:
//!     - torch==2.1.0
//!   run:
//!     - echo done
//! predict: predict.py:Predictor
//! ```
//!
//! Unknown keys are ignored so newer manifests still load.

mod access;
mod entrypoint;
mod requirement;

pub use access::AccessLevel;
pub use entrypoint::{Entrypoint, Mode};
pub use requirement::Requirement;

use cog_fs::{ConfigFormat, ConfigStore};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::validation::{ValidationError, ValidationReason};

/// Namespace used when `metadata.namespace` is absent.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Language version used when `build.python_version` is absent.
pub const DEFAULT_LANGUAGE_VERSION: &str = "3.8";

/// Fully-defaulted build manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildManifest {
    pub metadata: Metadata,
    pub spec: RepoSpec,
    pub build: BuildConfig,
    /// Callable serving predictions, `<module-path>:<symbol-name>`
    #[serde(rename = "predict")]
    pub predict_entrypoint: String,
    /// Optional training callable, same grammar as `predict`
    #[serde(rename = "train", skip_serializing_if = "Option::is_none")]
    pub train_entrypoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub namespace: String,
    pub published: bool,
}

/// Ownership and visibility of the repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoSpec {
    pub owner: String,
    pub access_level: AccessLevel,
}

/// Runtime environment of the built image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    pub gpu: bool,
    pub system_packages: Vec<String>,
    #[serde(rename = "python_version")]
    pub language_version: String,
    /// Pinned `name==version` packages
    #[serde(rename = "python_packages")]
    pub dependency_packages: Vec<String>,
    /// Shell commands run in listed order after packages are installed
    #[serde(rename = "run")]
    pub post_setup_commands: Vec<String>,
}

impl BuildManifest {
    /// Entrypoint for `mode`, parsed into its module and symbol.
    pub fn entrypoint(&self, mode: Mode) -> Result<Entrypoint> {
        let raw = match mode {
            Mode::Predict => Some(self.predict_entrypoint.as_str()),
            Mode::Train => self.train_entrypoint.as_deref(),
        };
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(Error::EntrypointNotSet { mode }),
        };
        raw.parse::<Entrypoint>()
            .map_err(|reason| Error::Validation(ValidationError::new(mode.key(), raw, reason)))
    }

    /// Serialize back to manifest YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Malformed {
            message: e.to_string(),
        })
    }
}

impl BuildConfig {
    /// Typed view of `dependency_packages`.
    ///
    /// Fails on the first entry that is not `name==version`.
    pub fn requirements(&self) -> Result<Vec<Requirement>> {
        self.dependency_packages
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.parse::<Requirement>().map_err(|reason: ValidationReason| {
                    Error::Validation(ValidationError::new(
                        format!("build.python_packages[{index}]"),
                        raw,
                        reason,
                    ))
                })
            })
            .collect()
    }
}

/// Manifest as decoded, before defaults are applied
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PartialMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<PartialSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<PartialBuild>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialBuild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_packages: Option<Vec<String>>,
    #[serde(
        default,
        rename = "python_version",
        alias = "language_version",
        deserialize_with = "version_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub language_version: Option<String>,
    #[serde(
        default,
        rename = "python_packages",
        alias = "dependency_packages",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependency_packages: Option<Vec<String>>,
    #[serde(
        default,
        rename = "run",
        alias = "post_setup_commands",
        skip_serializing_if = "Option::is_none"
    )]
    pub post_setup_commands: Option<Vec<String>>,
}

/// Accept `python_version: "3.10"` and integer versions such as `3`.
///
/// Unquoted decimals are rejected: a float cannot tell `3.1` from `3.10`.
fn version_scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(u64),
        Float(f64),
    }

    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Text(text)) => Ok(Some(text)),
        Some(Scalar::Integer(n)) => Ok(Some(n.to_string())),
        Some(Scalar::Float(_)) => Err(D::Error::custom(
            "python_version must be quoted, e.g. python_version: \"3.10\"",
        )),
    }
}

const TOP_LEVEL_KEYS: &[&str] = &["metadata", "spec", "build", "predict", "train"];
const METADATA_KEYS: &[&str] = &["name", "description", "namespace", "published"];
const SPEC_KEYS: &[&str] = &["owner", "access_level"];
const BUILD_KEYS: &[&str] = &[
    "gpu",
    "system_packages",
    "python_version",
    "language_version",
    "python_packages",
    "dependency_packages",
    "run",
    "post_setup_commands",
];

/// Keys of a decoded document that the manifest schema does not read,
/// as dotted paths (`build.cuda`).
pub fn unknown_keys(document: &serde_yaml::Value) -> Vec<String> {
    let mut unknown = Vec::new();
    let Some(top) = document.as_mapping() else {
        return unknown;
    };

    for (key, value) in top {
        let Some(key) = key.as_str() else {
            unknown.push(format!("{key:?}"));
            continue;
        };
        let known = match key {
            "metadata" => METADATA_KEYS,
            "spec" => SPEC_KEYS,
            "build" => BUILD_KEYS,
            _ if TOP_LEVEL_KEYS.contains(&key) => continue,
            _ => {
                unknown.push(key.to_string());
                continue;
            }
        };
        if let Some(section) = value.as_mapping() {
            for nested in section.keys() {
                match nested.as_str() {
                    Some(nested) if known.contains(&nested) => {}
                    Some(nested) => unknown.push(format!("{key}.{nested}")),
                    None => unknown.push(format!("{key}.{nested:?}")),
                }
            }
        }
    }
    unknown
}

/// Structurally decode manifest YAML.
///
/// Fails with [`Error::Malformed`] when the text is not a well-formed
/// manifest document. Comments are ignored; unknown keys are logged and
/// skipped.
pub fn decode(raw: &str) -> Result<PartialManifest> {
    decode_format(raw, ConfigFormat::Yaml)
}

/// Structurally decode a manifest written in any supported format.
pub fn decode_format(raw: &str, format: ConfigFormat) -> Result<PartialManifest> {
    let store = ConfigStore::new();
    let partial = store.parse(raw, format).map_err(|e| match e {
        cog_fs::Error::Decode { message, .. } => Error::Malformed { message },
        other => Error::Fs(other),
    })?;

    if let Ok(document) = store.parse::<serde_yaml::Value>(raw, format) {
        for key in unknown_keys(&document) {
            tracing::warn!(%key, "ignoring unknown manifest key");
        }
    }
    Ok(partial)
}

/// Substitute defaults for every absent optional field.
pub fn apply_defaults(partial: PartialManifest) -> BuildManifest {
    let metadata = partial.metadata.unwrap_or_default();
    let spec = partial.spec.unwrap_or_default();
    let build = partial.build.unwrap_or_default();

    BuildManifest {
        metadata: Metadata {
            name: metadata.name.unwrap_or_default(),
            description: metadata.description,
            namespace: metadata
                .namespace
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            published: metadata.published.unwrap_or(false),
        },
        spec: RepoSpec {
            owner: spec.owner.unwrap_or_default(),
            access_level: spec.access_level.unwrap_or_default(),
        },
        build: BuildConfig {
            gpu: build.gpu.unwrap_or(false),
            system_packages: build.system_packages.unwrap_or_default(),
            language_version: build
                .language_version
                .unwrap_or_else(|| DEFAULT_LANGUAGE_VERSION.to_string()),
            dependency_packages: build.dependency_packages.unwrap_or_default(),
            post_setup_commands: build.post_setup_commands.unwrap_or_default(),
        },
        predict_entrypoint: partial.predict.unwrap_or_default(),
        train_entrypoint: partial.train,
    }
}

impl From<BuildManifest> for PartialManifest {
    fn from(manifest: BuildManifest) -> Self {
        Self {
            metadata: Some(PartialMetadata {
                name: Some(manifest.metadata.name),
                description: manifest.metadata.description,
                namespace: Some(manifest.metadata.namespace),
                published: Some(manifest.metadata.published),
            }),
            spec: Some(PartialSpec {
                owner: Some(manifest.spec.owner),
                access_level: Some(manifest.spec.access_level),
            }),
            build: Some(PartialBuild {
                gpu: Some(manifest.build.gpu),
                system_packages: Some(manifest.build.system_packages),
                language_version: Some(manifest.build.language_version),
                dependency_packages: Some(manifest.build.dependency_packages),
                post_setup_commands: Some(manifest.build.post_setup_commands),
            }),
            predict: Some(manifest.predict_entrypoint),
            train: manifest.train_entrypoint,
        }
    }
}
