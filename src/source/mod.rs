//! Tag retrieval abstraction layer
//!
//! The engine only needs the names of existing tags. This module provides a
//! trait-based abstraction over where those names come from:
//!
//! - [Git2TagSource]: tags of a local repository, read with the `git2` crate
//! - [GitHubTagSource]: tags of a GitHub repository, read through the REST API
//! - [MockTagSource]: an in-memory list for tests
//!
//! Callers should depend on the [TagSource] trait rather than on a concrete
//! implementation.

pub mod git;
pub mod github;
pub mod mock;

pub use git::Git2TagSource;
pub use github::GitHubTagSource;
pub use mock::MockTagSource;

use crate::config::{SourceConfig, SourceKind};
use crate::error::{BumpTagError, Result};
use serde::Deserialize;

/// A tag as returned by a source, before classification
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTag {
    pub name: String,
}

impl RawTag {
    pub fn new(name: impl Into<String>) -> Self {
        RawTag { name: name.into() }
    }
}

/// Lists the tags that exist for a repository
///
/// Implementations perform at most one logical listing per call; any failure
/// (missing repository, network, authentication) is returned as an error and
/// ends the run.
pub trait TagSource {
    /// All tags reachable for the configured repository, in source order
    fn list_tags(&self) -> Result<Vec<RawTag>>;

    /// Short human-readable description used in logs
    fn describe(&self) -> String;
}

/// Build the tag source selected by the configuration
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn TagSource>> {
    match config.resolved_kind() {
        SourceKind::GitHub => {
            let repository = config.repository.as_deref().ok_or_else(|| {
                BumpTagError::config("A repository (owner/repo) is required for the github source")
            })?;
            Ok(Box::new(GitHubTagSource::new(
                &config.api_url,
                repository,
                config.github_token.clone(),
            )?))
        }
        SourceKind::Git | SourceKind::Auto => Ok(Box::new(Git2TagSource::open(&config.path)?)),
    }
}
