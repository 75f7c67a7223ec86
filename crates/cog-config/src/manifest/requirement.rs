//! Pinned package requirements (`name==version`)

use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationReason;

/// A dependency pinned to an exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

impl FromStr for Requirement {
    type Err = ValidationReason;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationReason::Empty);
        }
        match s.split_once("==") {
            Some((name, version)) if is_token(name) && is_token(version) => Ok(Self {
                name: name.to_string(),
                version: version.to_string(),
            }),
            _ => Err(ValidationReason::RequirementFormat),
        }
    }
}

/// Non-empty, with no whitespace and no `=`.
fn is_token(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| c == '=' || c.is_whitespace())
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}
