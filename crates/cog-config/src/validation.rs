//! Domain invariants of a defaulted manifest
//!
//! Checks run in a fixed order (`metadata.name`, `build.python_version`,
//! each `build.python_packages` entry, `predict`, `train`) and stop at the
//! first failure, so the same manifest always reports the same field.

use std::sync::LazyLock;

use regex::Regex;

use crate::manifest::{BuildManifest, Entrypoint, Requirement};

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").unwrap());

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationReason {
    #[error("must not be empty")]
    Empty,
    #[error("must be MAJOR.MINOR or MAJOR.MINOR.PATCH")]
    VersionFormat,
    #[error("must be of the form name==version")]
    RequirementFormat,
    #[error("must be of the form <module-path>:<symbol-name>")]
    EntrypointFormat,
}

/// A manifest field that violates an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} {value:?}: {reason}")]
pub struct ValidationError {
    /// Manifest key path, e.g. `build.python_packages[1]`
    pub field: String,
    /// The offending value as written
    pub value: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, value: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            reason,
        }
    }
}

/// Check every invariant, returning the first violation.
pub fn validate(manifest: &BuildManifest) -> Result<(), ValidationError> {
    if manifest.metadata.name.is_empty() {
        return Err(ValidationError::new("metadata.name", "", ValidationReason::Empty));
    }

    let version = &manifest.build.language_version;
    if !VERSION_PATTERN.is_match(version) {
        return Err(ValidationError::new(
            "build.python_version",
            version,
            ValidationReason::VersionFormat,
        ));
    }

    for (index, raw) in manifest.build.dependency_packages.iter().enumerate() {
        if let Err(reason) = raw.parse::<Requirement>() {
            return Err(ValidationError::new(
                format!("build.python_packages[{index}]"),
                raw,
                reason,
            ));
        }
    }

    let predict = &manifest.predict_entrypoint;
    if let Err(reason) = predict.parse::<Entrypoint>() {
        return Err(ValidationError::new("predict", predict, reason));
    }

    if let Some(train) = &manifest.train_entrypoint {
        if let Err(reason) = train.parse::<Entrypoint>() {
            return Err(ValidationError::new("train", train, reason));
        }
    }

    tracing::debug!(name = %manifest.metadata.name, "manifest valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_pattern() {
        for good in ["3.8", "3.10", "3.11.4", "10.0.0"] {
            assert!(VERSION_PATTERN.is_match(good), "{good}");
        }
        for bad in ["3", "3.", ".8", "3.8.1.2", "v3.8", "3.8 ", "3.x", "٣.٨", "３.８"] {
            assert!(!VERSION_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_error_message() {
        let err = ValidationError::new(
            "build.python_packages[1]",
            "torch",
            ValidationReason::RequirementFormat,
        );
        assert_eq!(
            err.to_string(),
            "Invalid build.python_packages[1] \"torch\": must be of the form name==version"
        );
    }
}
