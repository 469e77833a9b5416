use crate::error::Result;
use crate::source::{RawTag, TagSource};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Reads tag names from a local git repository
pub struct Git2TagSource {
    repo: Git2Repo,
}

impl Git2TagSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagSource { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource { repo }
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self) -> Result<Vec<RawTag>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(RawTag::new).collect())
    }

    fn describe(&self) -> String {
        let path = self.repo.workdir().unwrap_or_else(|| self.repo.path());
        format!("git:{}", path.display())
    }
}
