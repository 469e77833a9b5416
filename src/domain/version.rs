use std::fmt;

/// Numeric part of a version tag.
///
/// Ordering compares major, minor and patch as integers, then the pre-release
/// counter. A counter outranks its absence, so `1.2.3-beta < 1.2.3-beta.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<u32>,
}

impl VersionNumber {
    /// Create a new version without a pre-release counter
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionNumber {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Same version carrying the given pre-release counter
    pub fn with_prerelease(self, prerelease: u32) -> Self {
        VersionNumber {
            prerelease: Some(prerelease),
            ..self
        }
    }

    /// Bare `X.Y.Z` form, without any pre-release counter
    pub fn tag_name(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn bump_patch(&self) -> Self {
        VersionNumber::new(self.major, self.minor, self.patch + 1)
    }

    pub fn bump_minor(&self) -> Self {
        VersionNumber::new(self.major, self.minor + 1, 0)
    }

    pub fn bump_major(&self) -> Self {
        VersionNumber::new(self.major + 1, 0, 0)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = self.prerelease {
            write!(f, ".{}", prerelease)?;
        }
        Ok(())
    }
}
