//! Format-agnostic configuration decoding

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, io};

/// Largest config file [`ConfigStore`] will read by default (1 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 1024 * 1024;

/// Structured text formats a config can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    ///
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => write!(f, "YAML"),
            ConfigFormat::Toml => write!(f, "TOML"),
            ConfigFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects format from file extension and handles deserialization
/// transparently. Files above `max_size` are rejected before they are read.
#[derive(Debug, Clone, Copy)]
pub struct ConfigStore {
    max_size: u64,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl ConfigStore {
    /// Create a new ConfigStore with the default size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigStore with a custom size limit in bytes.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Decode in-memory content of a known format.
    pub fn parse<T: DeserializeOwned>(&self, content: &str, format: ConfigFormat) -> Result<T> {
        let decoded = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        decoded.map_err(|message| Error::Decode {
            format: format.to_string(),
            message,
        })
    }

    /// Load configuration from a file, detecting the format from its extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text_bounded(path, self.max_size)?;
        tracing::debug!(path = %path.display(), %format, "decoding config");

        self.parse(&content, format).map_err(|e| match e {
            Error::Decode { format, message } => Error::ConfigParse {
                path: path.to_path_buf(),
                format,
                message,
            },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("cog.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("cog.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("cog.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("cog.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("cog")),
            Err(Error::UnsupportedFormat { extension }) if extension.is_empty()
        ));
    }

    #[test]
    fn test_default_max_size() {
        assert_eq!(ConfigStore::new().max_size(), DEFAULT_MAX_SIZE);
        assert_eq!(ConfigStore::with_max_size(10).max_size(), 10);
    }
}
