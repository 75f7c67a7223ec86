//! Repository visibility

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coarse visibility of a published model.
///
/// Decoded case-insensitively; displayed upper-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessLevel {
    #[default]
    Private,
    Internal,
    Public,
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(AccessLevel::Private),
            "internal" => Ok(AccessLevel::Internal),
            "public" => Ok(AccessLevel::Public),
            _ => Err(Error::InvalidAccessLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::Private => write!(f, "PRIVATE"),
            AccessLevel::Internal => write!(f, "INTERNAL"),
            AccessLevel::Public => write!(f, "PUBLIC"),
        }
    }
}
