//! Requested version increment
//!
//! Accepts both the single `prerelease` kind and the scoped
//! `prepatch`/`preminor`/`premajor` kinds.

use crate::error::{BumpTagError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of bump to apply to the selected tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    /// Keep the version, optionally rewriting the suffix
    #[default]
    None,
    Patch,
    Minor,
    Major,
    /// Pre-release bump; a new series starts at the next minor version
    Prerelease,
    Prepatch,
    Preminor,
    Premajor,
}

impl BumpKind {
    /// Parse a bump kind from a configuration string
    ///
    /// An empty string means [`BumpKind::None`].
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Whether this kind works on the pre-release counter
    pub fn is_prerelease(&self) -> bool {
        matches!(
            self,
            BumpKind::Prerelease | BumpKind::Prepatch | BumpKind::Preminor | BumpKind::Premajor
        )
    }
}

impl FromStr for BumpKind {
    type Err = BumpTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(BumpKind::None),
            "patch" => Ok(BumpKind::Patch),
            "minor" => Ok(BumpKind::Minor),
            "major" => Ok(BumpKind::Major),
            "prerelease" => Ok(BumpKind::Prerelease),
            "prepatch" => Ok(BumpKind::Prepatch),
            "preminor" => Ok(BumpKind::Preminor),
            "premajor" => Ok(BumpKind::Premajor),
            _ => Err(BumpTagError::config(format!(
                "Invalid bump kind: '{}' - expected one of none, patch, minor, major, prerelease, prepatch, preminor, premajor",
                s
            ))),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::None => "none",
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
            BumpKind::Prerelease => "prerelease",
            BumpKind::Prepatch => "prepatch",
            BumpKind::Preminor => "preminor",
            BumpKind::Premajor => "premajor",
        };
        write!(f, "{}", name)
    }
}
