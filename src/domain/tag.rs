use crate::domain::VersionNumber;
use crate::error::{BumpTagError, Result};
use regex::{Captures, Regex};
use std::fmt;

const VERSION_BODY: &str = r"(\d{1,3})\.(\d{1,3})\.(\d{1,3})";

/// A version tag split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    /// The tag exactly as it appears in the repository (or as rendered)
    pub full_tag: String,
    pub prefix: String,
    /// Bare `X.Y.Z` form regardless of shape
    pub tag_name: String,
    /// Suffix of the series this tag belongs to, without the leading `-`
    pub suffix: String,
    pub number: VersionNumber,
}

impl VersionTag {
    /// Build a tag from its parts, rendering `full_tag` as
    /// `prefix + X.Y.Z [+ -suffix] [+ .prerelease]`
    pub fn render(prefix: &str, suffix: &str, number: VersionNumber) -> Self {
        let tag_name = number.tag_name();
        let mut full_tag = format!("{}{}", prefix, tag_name);
        if !suffix.is_empty() {
            full_tag.push('-');
            full_tag.push_str(suffix);
        }
        if let Some(prerelease) = number.prerelease {
            full_tag.push_str(&format!(".{}", prerelease));
        }

        VersionTag {
            full_tag,
            prefix: prefix.to_string(),
            tag_name,
            suffix: suffix.to_string(),
            number,
        }
    }

    /// The `0.0.0` tag used when nothing in the repository qualifies
    pub fn zero(prefix: &str, suffix: &str) -> Self {
        VersionTag::render(prefix, suffix, VersionNumber::default())
    }

    pub fn prerelease_number(&self) -> Option<u32> {
        self.number.prerelease
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_tag)
    }
}

/// The three tag layouts the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    /// `prefix X.Y.Z`
    NoSuffix,
    /// `prefix X.Y.Z-suffix`
    WithSuffix,
    /// `prefix X.Y.Z-suffix.N`
    Prerelease,
}

/// Recognizes tag shapes for one prefix/suffix pair.
///
/// Prefix and suffix are matched literally and every component is capped at three
/// digits. With an empty suffix only [`TagShape::NoSuffix`] can match.
#[derive(Debug, Clone)]
pub struct TagClassifier {
    prefix: String,
    suffix: String,
    no_suffix: Regex,
    suffixed: Option<SuffixedPatterns>,
}

#[derive(Debug, Clone)]
struct SuffixedPatterns {
    with_suffix: Regex,
    prerelease: Regex,
}

impl TagClassifier {
    /// Build the shape patterns for the given prefix and suffix
    pub fn new(prefix: &str, suffix: &str) -> Result<Self> {
        let escaped_prefix = regex::escape(prefix);
        let no_suffix = compile(&format!("^{}{}$", escaped_prefix, VERSION_BODY))?;

        let suffixed = if suffix.is_empty() {
            None
        } else {
            let escaped_suffix = regex::escape(suffix);
            Some(SuffixedPatterns {
                with_suffix: compile(&format!(
                    "^{}{}-{}$",
                    escaped_prefix, VERSION_BODY, escaped_suffix
                ))?,
                prerelease: compile(&format!(
                    r"^{}{}-{}\.(\d{{1,3}})$",
                    escaped_prefix, VERSION_BODY, escaped_suffix
                ))?,
            })
        };

        Ok(TagClassifier {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            no_suffix,
            suffixed,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Shape of a tag string, if it matches one
    pub fn shape(&self, tag: &str) -> Option<TagShape> {
        self.captures(tag).map(|(shape, _)| shape)
    }

    /// Parse a tag name into a [`VersionTag`] of this classifier's series.
    ///
    /// Returns `None` when the name matches none of the three shapes.
    pub fn parse(&self, name: &str) -> Option<VersionTag> {
        let (shape, caps) = self.captures(name)?;

        let mut number = VersionNumber::new(
            component(&caps, 1)?,
            component(&caps, 2)?,
            component(&caps, 3)?,
        );
        if shape == TagShape::Prerelease {
            number = number.with_prerelease(component(&caps, 4)?);
        }

        Some(VersionTag {
            full_tag: name.to_string(),
            prefix: self.prefix.clone(),
            tag_name: number.tag_name(),
            suffix: self.suffix.clone(),
            number,
        })
    }

    fn captures<'t>(&self, tag: &'t str) -> Option<(TagShape, Captures<'t>)> {
        if let Some(caps) = self.no_suffix.captures(tag) {
            return Some((TagShape::NoSuffix, caps));
        }

        let suffixed = self.suffixed.as_ref()?;
        if let Some(caps) = suffixed.with_suffix.captures(tag) {
            return Some((TagShape::WithSuffix, caps));
        }
        suffixed
            .prerelease
            .captures(tag)
            .map(|caps| (TagShape::Prerelease, caps))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| BumpTagError::tag(format!("Invalid tag pattern '{}': {}", pattern, e)))
}

fn component(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(prefix: &str, suffix: &str) -> TagClassifier {
        TagClassifier::new(prefix, suffix).unwrap()
    }

    #[test]
    fn test_shapes_with_suffix() {
        let c = classifier("v", "beta");
        assert_eq!(c.shape("v1.2.3"), Some(TagShape::NoSuffix));
        assert_eq!(c.shape("v1.2.3-beta"), Some(TagShape::WithSuffix));
        assert_eq!(c.shape("v1.2.3-beta.4"), Some(TagShape::Prerelease));
        assert_eq!(c.shape("v1.2.3-alpha"), None);
        assert_eq!(c.shape("v1.2.3-alpha.1"), None);
    }

    #[test]
    fn test_shapes_without_suffix() {
        let c = classifier("v", "");
        assert_eq!(c.shape("v1.2.3"), Some(TagShape::NoSuffix));
        assert_eq!(c.shape("v1.2.3-"), None);
        assert_eq!(c.shape("v1.2.3-.1"), None);
        assert_eq!(c.shape("v1.2.3.4"), None);
        assert_eq!(c.shape("v1.2.3-beta"), None);
    }

    #[test]
    fn test_separators_are_literal_dots() {
        let c = classifier("v", "beta");
        assert_eq!(c.shape("v1x2y3"), None);
        assert_eq!(c.shape("v1.2.3-betax1"), None);
    }

    #[test]
    fn test_prefix_and_suffix_are_literal() {
        let c = classifier("release.", "rc+1");
        assert_eq!(c.shape("release.1.2.3"), Some(TagShape::NoSuffix));
        assert_eq!(c.shape("releasex1.2.3"), None);
        assert_eq!(c.shape("release.1.2.3-rc+1"), Some(TagShape::WithSuffix));
        assert_eq!(c.shape("release.1.2.3-rcc1"), None);
    }

    #[test]
    fn test_prefix_must_match() {
        let c = classifier("v", "");
        assert_eq!(c.shape("1.2.3"), None);
        assert_eq!(c.shape("V1.2.3"), None);
        assert_eq!(classifier("", "").shape("1.2.3"), Some(TagShape::NoSuffix));
    }

    #[test]
    fn test_components_capped_at_three_digits() {
        let c = classifier("v", "beta");
        assert_eq!(c.shape("v999.999.999"), Some(TagShape::NoSuffix));
        assert_eq!(c.shape("v1000.0.0"), None);
        assert_eq!(c.shape("v1.2.3-beta.1000"), None);
    }

    #[test]
    fn test_parse_prerelease_tag() {
        let tag = classifier("v", "beta").parse("v8.9.12-beta.3").unwrap();
        assert_eq!(tag.full_tag, "v8.9.12-beta.3");
        assert_eq!(tag.prefix, "v");
        assert_eq!(tag.tag_name, "8.9.12");
        assert_eq!(tag.suffix, "beta");
        assert_eq!(tag.number, VersionNumber::new(8, 9, 12).with_prerelease(3));
        assert_eq!(tag.prerelease_number(), Some(3));
    }

    #[test]
    fn test_parse_bare_tag_joins_configured_series() {
        let tag = classifier("v", "beta").parse("v3.0.12").unwrap();
        assert_eq!(tag.suffix, "beta");
        assert_eq!(tag.number, VersionNumber::new(3, 0, 12));
        assert_eq!(tag.prerelease_number(), None);
    }

    #[test]
    fn test_parse_unmatched() {
        assert!(classifier("v", "beta").parse("latest").is_none());
        assert!(classifier("v", "beta").parse("v1.2").is_none());
    }

    #[test]
    fn test_render() {
        let number = VersionNumber::new(1, 2, 3);
        assert_eq!(VersionTag::render("v", "", number).full_tag, "v1.2.3");
        assert_eq!(VersionTag::render("v", "beta", number).full_tag, "v1.2.3-beta");
        assert_eq!(
            VersionTag::render("v", "beta", number.with_prerelease(2)).full_tag,
            "v1.2.3-beta.2"
        );
        assert_eq!(VersionTag::render("", "", number).to_string(), "1.2.3");
    }

    #[test]
    fn test_zero() {
        let tag = VersionTag::zero("v", "beta");
        assert_eq!(tag.full_tag, "v0.0.0-beta");
        assert_eq!(tag.tag_name, "0.0.0");
        assert_eq!(tag.number, VersionNumber::new(0, 0, 0));
    }
}
