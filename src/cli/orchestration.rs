//! Main workflow orchestration logic
//!
//! Sequences one run: validate the configuration, list existing tags, classify
//! them, select the starting tag and bump it. Emitting the result is left to
//! the caller.

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BumpKind, SuffixPolicy, TagBumper, TagClassifier, TagSelector, VersionTag};
use crate::error::Result;
use crate::source::{RawTag, TagSource};
use crate::validation::validate;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag the bump started from (possibly the synthesized `0.0.0`)
    pub latest_tag: VersionTag,

    /// The computed next tag
    pub updated_tag: VersionTag,

    /// Non-fatal conditions to report next to the result
    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the next tag for the given configuration.
///
/// Validation happens before the source is queried, so an invalid
/// configuration never causes a fetch.
pub fn run_workflow(config: &Config, source: &dyn TagSource) -> Result<WorkflowResult> {
    let mut warnings = validate(config)?;
    let classifier = TagClassifier::new(&config.prefix, &config.suffix)?;

    let raw_tags = source.list_tags()?;
    info!(source = %source.describe(), count = raw_tags.len(), "fetched tags");

    let tags = classify_tags(&classifier, &raw_tags);
    if tags.is_empty() && !raw_tags.is_empty() {
        warnings.push(BoundaryWarning::NoMatchingTags {
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            fetched: raw_tags.len(),
        });
    }

    let selector = TagSelector::new(&classifier, config.selection);
    let latest_tag = match config.bump {
        BumpKind::Patch | BumpKind::Minor | BumpKind::Major => selector.select_for_base_bump(&tags),
        BumpKind::None
        | BumpKind::Prerelease
        | BumpKind::Prepatch
        | BumpKind::Preminor
        | BumpKind::Premajor => selector.select_for_prerelease_bump(&tags),
    };

    let bumper = TagBumper::new(SuffixPolicy::from_flag(
        config.replace_suffix,
        config.new_suffix.as_deref(),
    ));
    let updated_tag = bumper.bump(&latest_tag, config.bump);
    info!(
        latest = %latest_tag,
        updated = %updated_tag,
        bump = %config.bump,
        "computed next tag"
    );

    Ok(WorkflowResult {
        latest_tag,
        updated_tag,
        warnings,
    })
}

/// Parse every raw tag that matches one of the classifier's shapes
pub fn classify_tags(classifier: &TagClassifier, raw_tags: &[RawTag]) -> Vec<VersionTag> {
    raw_tags
        .iter()
        .filter_map(|raw| {
            let parsed = classifier.parse(&raw.name);
            if parsed.is_none() {
                debug!(tag = %raw.name, "ignoring tag outside the configured series");
            }
            parsed
        })
        .collect()
}
