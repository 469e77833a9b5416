use crate::error::{BumpTagError, Result};
use crate::source::{RawTag, TagSource};

/// In-memory tag source for testing without a repository
pub struct MockTagSource {
    tags: Vec<RawTag>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock source listing the given tag names in order
    pub fn with_tags<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: names.into_iter().map(RawTag::new).collect(),
            failure: None,
        }
    }

    /// Create a mock source whose listing always fails with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add a tag at the end of the listing
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(RawTag::new(name));
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<RawTag>> {
        match &self.failure {
            Some(message) => Err(BumpTagError::remote(message.clone())),
            None => Ok(self.tags.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
