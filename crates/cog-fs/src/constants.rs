//! Well-known manifest filenames.

use std::path::Path;

/// Manifest filenames recognised in a project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFile {
    /// `cog.yaml`, the file every loader reads
    Canonical,
    /// `catalog-info.yaml`, accepted through the startup alias
    Legacy,
}

impl ManifestFile {
    /// Get the filename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "cog.yaml",
            Self::Legacy => "catalog-info.yaml",
        }
    }
}

impl AsRef<Path> for ManifestFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ManifestFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filenames() {
        assert_eq!(ManifestFile::Canonical.to_string(), "cog.yaml");
        assert_eq!(ManifestFile::Legacy.to_string(), "catalog-info.yaml");
        assert_eq!(
            Path::new("/src").join(ManifestFile::Canonical),
            Path::new("/src/cog.yaml")
        );
    }
}
