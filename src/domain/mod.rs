//! Domain logic - pure version-tag rules independent of where tags come from

pub mod bump;
pub mod bumper;
pub mod selector;
pub mod tag;
pub mod version;

pub use bump::BumpKind;
pub use bumper::{SuffixPolicy, TagBumper};
pub use selector::{SelectionPolicy, TagSelector};
pub use tag::{TagClassifier, TagShape, VersionTag};
pub use version::VersionNumber;
