use std::fmt;

/// Non-fatal conditions reported to the user alongside the result.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A suffix is configured together with suffix replacement
    ReplaceSuffixUnnecessary { suffix: String },
    /// No fetched tag matches the configured prefix and suffix
    NoMatchingTags {
        prefix: String,
        suffix: String,
        fetched: usize,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ReplaceSuffixUnnecessary { .. } => write!(
                f,
                "If there is no tag with the provided suffix, copy_from is unnecessary"
            ),
            BoundaryWarning::NoMatchingTags {
                prefix,
                suffix,
                fetched,
            } => {
                write!(
                    f,
                    "None of the {} fetched tags match prefix '{}'",
                    fetched, prefix
                )?;
                if !suffix.is_empty() {
                    write!(f, " and suffix '{}'", suffix)?;
                }
                write!(f, "; starting from 0.0.0")
            }
        }
    }
}
