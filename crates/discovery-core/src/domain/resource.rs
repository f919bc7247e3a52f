//! Resource entity and its value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Theme,
    Plugin,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme => write!(f, "theme"),
            Self::Plugin => write!(f, "plugin"),
        }
    }
}

impl FromStr for ResourceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "theme" => Ok(Self::Theme),
            "plugin" => Ok(Self::Plugin),
            _ => Err(()),
        }
    }
}

/// Platform a resource targets.
///
/// `All` is a wildcard: a resource tagged `all` matches every
/// platform filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    All,
    Windows,
    Macos,
    Linux,
}

impl Platform {
    /// Whether a resource tagged with this platform satisfies a filter
    /// for `requested`.
    #[must_use]
    pub fn matches(self, requested: Platform) -> bool {
        self == requested || self == Self::All
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Windows => write!(f, "windows"),
            Self::Macos => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::Macos),
            "linux" => Ok(Self::Linux),
            _ => Err(()),
        }
    }
}

/// A catalog entry (theme or plugin).
///
/// Resources are immutable once loaded; the dataset never mutates
/// them. Attributes the catalog source carries beyond the typed fields
/// are preserved verbatim in `extra` and re-serialized unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier for the resource.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Kind of entry.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Target platform.
    pub platform: Platform,

    /// Lifetime download counter.
    pub download_count: u64,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,

    /// Opaque source attributes, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
