//! Selection of the tag a bump starts from
//!
//! Tags are split into three pools by shape. Base bumps always prefer the
//! suffixed pool; for pre-release bumps the fallback across pools is controlled
//! by [`SelectionPolicy`].

use crate::domain::{TagClassifier, TagShape, VersionTag};
use crate::error::{BumpTagError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How the pre-release selector falls back across shape pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Highest version across all eligible pools; pool priority only breaks exact ties
    #[default]
    Latest,
    /// Highest version of the first non-empty pool in priority order
    Priority,
}

impl FromStr for SelectionPolicy {
    type Err = BumpTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(SelectionPolicy::Latest),
            "priority" => Ok(SelectionPolicy::Priority),
            _ => Err(BumpTagError::config(format!(
                "Invalid selection policy: '{}' - expected latest or priority",
                s
            ))),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Latest => write!(f, "latest"),
            SelectionPolicy::Priority => write!(f, "priority"),
        }
    }
}

/// Picks the latest applicable tag for a bump
pub struct TagSelector<'a> {
    classifier: &'a TagClassifier,
    policy: SelectionPolicy,
}

struct Pools<'t> {
    no_suffix: Vec<&'t VersionTag>,
    with_suffix: Vec<&'t VersionTag>,
    prerelease: Vec<&'t VersionTag>,
}

impl<'a> TagSelector<'a> {
    pub fn new(classifier: &'a TagClassifier, policy: SelectionPolicy) -> Self {
        TagSelector { classifier, policy }
    }

    /// Select the tag a pre-release (or `none`) bump starts from.
    ///
    /// Considers all three pools. Pool priority is Prerelease, then WithSuffix,
    /// then NoSuffix.
    pub fn select_for_prerelease_bump(&self, tags: &[VersionTag]) -> VersionTag {
        let pools = self.partition(tags);
        let selected = match self.policy {
            SelectionPolicy::Latest => {
                latest_across(&[&pools.no_suffix, &pools.with_suffix, &pools.prerelease])
            }
            SelectionPolicy::Priority => {
                first_non_empty(&[&pools.prerelease, &pools.with_suffix, &pools.no_suffix])
            }
        };
        self.or_zero(selected)
    }

    /// Select the tag a patch, minor or major bump starts from.
    ///
    /// Pre-release tags are never considered. With a suffix configured the
    /// suffixed pool is used, falling back to unsuffixed tags only when it is
    /// empty. The selection policy does not apply here.
    pub fn select_for_base_bump(&self, tags: &[VersionTag]) -> VersionTag {
        let pools = self.partition(tags);
        self.or_zero(first_non_empty(&[&pools.with_suffix, &pools.no_suffix]))
    }

    fn partition<'t>(&self, tags: &'t [VersionTag]) -> Pools<'t> {
        let mut pools = Pools {
            no_suffix: Vec::new(),
            with_suffix: Vec::new(),
            prerelease: Vec::new(),
        };

        for tag in tags {
            match self.classifier.shape(&tag.full_tag) {
                Some(TagShape::NoSuffix) => pools.no_suffix.push(tag),
                Some(TagShape::WithSuffix) => pools.with_suffix.push(tag),
                Some(TagShape::Prerelease) => pools.prerelease.push(tag),
                None => debug!(tag = %tag.full_tag, "tag matches no shape, skipping"),
            }
        }

        debug!(
            no_suffix = pools.no_suffix.len(),
            with_suffix = pools.with_suffix.len(),
            prerelease = pools.prerelease.len(),
            policy = %self.policy,
            "partitioned tags"
        );
        pools
    }

    fn or_zero(&self, selected: Option<&VersionTag>) -> VersionTag {
        match selected {
            Some(tag) => tag.clone(),
            None => {
                debug!("no tag qualifies, starting from 0.0.0");
                VersionTag::zero(self.classifier.prefix(), self.classifier.suffix())
            }
        }
    }
}

/// Greatest tag of a pool; among equal versions the last one in input order wins.
fn max_in_pool<'t>(pool: &[&'t VersionTag]) -> Option<&'t VersionTag> {
    pool.iter().copied().max_by(|a, b| a.number.cmp(&b.number))
}

// Pools are given lowest priority first so that `max_by` keeps the
// higher-priority candidate on ties.
fn latest_across<'t>(pools: &[&Vec<&'t VersionTag>]) -> Option<&'t VersionTag> {
    pools
        .iter()
        .filter_map(|pool| max_in_pool(pool))
        .max_by(|a, b| a.number.cmp(&b.number))
}

fn first_non_empty<'t>(pools: &[&Vec<&'t VersionTag>]) -> Option<&'t VersionTag> {
    pools
        .iter()
        .find(|pool| !pool.is_empty())
        .and_then(|pool| max_in_pool(pool))
}
