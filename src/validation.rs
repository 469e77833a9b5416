//! Configuration checks that run before any tag is fetched

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::BumpKind;
use thiserror::Error;

/// Invalid combinations of configuration values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Prerelease bumps must be used with a suffix")]
    MissingSuffixForPrerelease,

    #[error("The flag copy_from:true is not meant to be used with bump:{bump}")]
    ConflictingReplaceWithPrerelease { bump: BumpKind },

    #[error("A new_suffix must be defined when using replace_suffix:true")]
    MissingNewSuffix,
}

/// Check the configuration, returning advisory warnings when it is usable.
///
/// Checks run in a fixed order and the first failure wins.
pub fn validate(config: &Config) -> Result<Vec<BoundaryWarning>, ValidationError> {
    let bump = config.bump;

    if bump.is_prerelease() && config.suffix.is_empty() {
        return Err(ValidationError::MissingSuffixForPrerelease);
    }

    if bump.is_prerelease() && config.replace_suffix {
        return Err(ValidationError::ConflictingReplaceWithPrerelease { bump });
    }

    let has_new_suffix = config
        .new_suffix
        .as_deref()
        .is_some_and(|suffix| !suffix.is_empty());
    if config.replace_suffix && !has_new_suffix {
        return Err(ValidationError::MissingNewSuffix);
    }

    let mut warnings = Vec::new();
    if !config.suffix.is_empty() && config.replace_suffix {
        warnings.push(BoundaryWarning::ReplaceSuffixUnnecessary {
            suffix: config.suffix.clone(),
        });
    }
    Ok(warnings)
}
