//! Process-wide client settings

/// Environment variable naming the host used when a reference has none.
pub const DEFAULT_HOST_ENV: &str = "COG_INTERNAL_DEFAULT_SERVER";

/// Read-only configuration consulted during endpoint resolution.
///
/// Empty values are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    default_host: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_host(host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            default_host: (!host.is_empty()).then_some(host),
        }
    }

    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DEFAULT_HOST_ENV) {
            Some(host) => Self::with_default_host(host),
            None => Self::default(),
        }
    }

    pub fn default_host(&self) -> Option<&str> {
        self.default_host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_host() {
        assert_eq!(Settings::new().default_host(), None);
    }

    #[test]
    fn test_empty_host_is_unset() {
        assert_eq!(Settings::with_default_host("").default_host(), None);
    }

    #[test]
    fn test_from_lookup() {
        let settings = Settings::from_lookup(|key| {
            (key == DEFAULT_HOST_ENV).then(|| "cog.internal".to_string())
        });
        assert_eq!(settings.default_host(), Some("cog.internal"));

        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }
}
