//! Repository references (`[host/]owner/name`)

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Address of a model repository, optionally including its serving host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoReference {
    host: Option<String>,
    owner: String,
    name: String,
}

impl RepoReference {
    /// Build a reference from its parts. An empty `host` means unset.
    pub fn new(host: Option<&str>, owner: &str, name: &str) -> Result<Self> {
        if owner.is_empty() || name.is_empty() || owner.contains('/') || name.contains('/') {
            let input = match host {
                Some(host) if !host.is_empty() => format!("{host}/{owner}/{name}"),
                _ => format!("{owner}/{name}"),
            };
            let segments = input.split('/').count();
            return Err(Error::InvalidFormat { input, segments });
        }
        Ok(Self {
            host: host.filter(|h| !h.is_empty()).map(str::to_string),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of this reference served from `host`.
    pub fn with_host(&self, host: &str) -> Self {
        Self {
            host: (!host.is_empty()).then(|| host.to_string()),
            ..self.clone()
        }
    }
}

impl FromStr for RepoReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<&str> = s.split('/').collect();
        let invalid = || Error::InvalidFormat {
            input: s.to_string(),
            segments: segments.len(),
        };

        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid());
        }

        match segments.as_slice() {
            [host, owner, name] => Self::new(Some(*host), owner, name),
            [owner, name] => Self::new(None, owner, name),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}/{}/{}", host, self.owner, self.name),
            None => write!(f, "{}/{}", self.owner, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_treats_empty_host_as_unset() {
        let repo = RepoReference::new(Some(""), "acme", "widget").unwrap();
        assert_eq!(repo.host(), None);
        assert_eq!(repo.to_string(), "acme/widget");
    }

    #[test]
    fn test_new_rejects_empty_parts() {
        assert!(RepoReference::new(None, "", "widget").is_err());
        assert!(RepoReference::new(None, "acme", "").is_err());
        assert!(RepoReference::new(Some("h"), "acme", "a/b").is_err());
    }

    #[test]
    fn test_with_host() {
        let repo: RepoReference = "acme/widget".parse().unwrap();
        let hosted = repo.with_host("example.org");
        assert_eq!(hosted.to_string(), "example.org/acme/widget");
        assert_eq!(hosted.with_host("").host(), None);
    }
}
