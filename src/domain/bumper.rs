use crate::domain::{BumpKind, VersionNumber, VersionTag};

/// What suffix the bumped tag is rendered with
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuffixPolicy {
    /// Keep the selected tag's series suffix and pre-release counter
    #[default]
    Keep,
    /// Render with this suffix instead; the pre-release counter is dropped
    Replace(String),
}

impl SuffixPolicy {
    /// Replacement applies only when the flag is set and a non-empty suffix is given
    pub fn from_flag(replace_suffix: bool, new_suffix: Option<&str>) -> Self {
        match new_suffix {
            Some(suffix) if replace_suffix && !suffix.is_empty() => {
                SuffixPolicy::Replace(suffix.to_string())
            }
            _ => SuffixPolicy::Keep,
        }
    }
}

/// Produces the next tag from a selected one
#[derive(Debug, Clone, Default)]
pub struct TagBumper {
    policy: SuffixPolicy,
}

impl TagBumper {
    pub fn new(policy: SuffixPolicy) -> Self {
        TagBumper { policy }
    }

    /// Apply the given bump kind
    pub fn bump(&self, tag: &VersionTag, kind: BumpKind) -> VersionTag {
        match kind {
            BumpKind::None => self.bump_none(tag),
            BumpKind::Patch => self.bump_patch(tag),
            BumpKind::Minor => self.bump_minor(tag),
            BumpKind::Major => self.bump_major(tag),
            BumpKind::Prerelease | BumpKind::Prepatch | BumpKind::Preminor | BumpKind::Premajor => {
                self.bump_prerelease(tag, kind)
            }
        }
    }

    /// `X.Y.Z` -> `X.Y.(Z+1)`
    pub fn bump_patch(&self, tag: &VersionTag) -> VersionTag {
        self.render(tag, tag.number.bump_patch())
    }

    /// `X.Y.Z` -> `X.(Y+1).0`
    pub fn bump_minor(&self, tag: &VersionTag) -> VersionTag {
        self.render(tag, tag.number.bump_minor())
    }

    /// `X.Y.Z` -> `(X+1).0.0`
    pub fn bump_major(&self, tag: &VersionTag) -> VersionTag {
        self.render(tag, tag.number.bump_major())
    }

    /// Increment the pre-release counter, or start a new series at `.1`.
    ///
    /// A new series increments the component the kind is scoped to; plain
    /// `prerelease` behaves like `preminor`.
    pub fn bump_prerelease(&self, tag: &VersionTag, kind: BumpKind) -> VersionTag {
        let number = match tag.number.prerelease {
            Some(counter) => tag.number.with_prerelease(counter + 1),
            None => {
                let base = match kind {
                    BumpKind::Prepatch => tag.number.bump_patch(),
                    BumpKind::Premajor => tag.number.bump_major(),
                    _ => tag.number.bump_minor(),
                };
                base.with_prerelease(1)
            }
        };
        self.render(tag, number)
    }

    /// Keep the version; only a suffix replacement changes the rendered tag
    pub fn bump_none(&self, tag: &VersionTag) -> VersionTag {
        match self.policy {
            SuffixPolicy::Keep => tag.clone(),
            SuffixPolicy::Replace(_) => self.render(tag, tag.number),
        }
    }

    fn render(&self, tag: &VersionTag, number: VersionNumber) -> VersionTag {
        match &self.policy {
            SuffixPolicy::Keep => VersionTag::render(&tag.prefix, &tag.suffix, number),
            SuffixPolicy::Replace(new_suffix) => VersionTag::render(
                &tag.prefix,
                new_suffix,
                VersionNumber {
                    prerelease: None,
                    ..number
                },
            ),
        }
    }
}
