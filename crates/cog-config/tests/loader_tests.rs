//! Integration tests for loading manifests from disk

use cog_config::{Error, load_manifest, load_manifest_from};
use cog_fs::{ManifestFile, alias_legacy_manifest};
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"
metadata:
  name: hello
build:
  python_version: "3.11"
predict: predict.py:Predictor
"#;

#[test]
fn test_load_canonical_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(ManifestFile::Canonical), MANIFEST).unwrap();

    let manifest = load_manifest(temp.path()).unwrap();

    assert_eq!(manifest.metadata.name, "hello");
    assert_eq!(manifest.build.language_version, "3.11");
}

#[test]
fn test_load_missing_manifest() {
    let temp = TempDir::new().unwrap();

    let err = load_manifest(temp.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::ManifestNotFound { path } if path == temp.path().join("cog.yaml")
    ));
}

#[test]
fn test_load_legacy_manifest_after_bootstrap() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(ManifestFile::Legacy), MANIFEST).unwrap();

    assert!(load_manifest(temp.path()).is_err());
    alias_legacy_manifest(temp.path()).unwrap();

    let manifest = load_manifest(temp.path()).unwrap();
    assert_eq!(manifest.metadata.name, "hello");
}

#[test]
fn test_load_toml_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cog.toml");
    fs::write(
        &path,
        r#"
predict = "predict.py:Predictor"

[metadata]
name = "hello"

[build]
gpu = true
python_version = "3.9"
"#,
    )
    .unwrap();

    let manifest = load_manifest_from(&path).unwrap();

    assert!(manifest.build.gpu);
    assert_eq!(manifest.build.language_version, "3.9");
}

#[test]
fn test_load_json_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cog.json");
    fs::write(
        &path,
        r#"{"metadata": {"name": "hello"}, "predict": "predict.py:Predictor"}"#,
    )
    .unwrap();

    let manifest = load_manifest_from(&path).unwrap();

    assert_eq!(manifest.metadata.name, "hello");
}

#[test]
fn test_load_malformed_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(ManifestFile::Canonical), "metadata: [\n").unwrap();

    let err = load_manifest(temp.path()).unwrap_err();

    assert!(matches!(err, Error::Malformed { .. }));
}

#[test]
fn test_load_invalid_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(ManifestFile::Canonical),
        "metadata:\n  name: hello\npredict: predict.py\n",
    )
    .unwrap();

    let err = load_manifest(temp.path()).unwrap_err();

    match err {
        Error::Validation(err) => assert_eq!(err.field, "predict"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_oversized_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(ManifestFile::Canonical);
    let mut content = String::from(MANIFEST);
    content.push_str(&format!("# {}\n", "x".repeat(1024 * 1024)));
    fs::write(&path, content).unwrap();

    let err = load_manifest(temp.path()).unwrap_err();

    assert!(matches!(err, Error::ManifestTooLarge { max: 1048576, .. }));
}
