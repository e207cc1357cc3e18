use crate::ids;
use std::collections::BTreeSet;
use std::fmt;

/// What kind of dependency pattern a finding describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Same package declared with different major versions across groups.
    VersionConflict,
    /// Two packages that are conventionally installed together.
    PairedCoupling,
    /// A package on the deprecated list.
    Deprecated,
    /// The package manager reported a dependency cycle.
    Cycle,
    /// The manifest declares peer dependencies.
    PeerCounseling,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::VersionConflict,
        Category::PairedCoupling,
        Category::Deprecated,
        Category::Cycle,
        Category::PeerCounseling,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::VersionConflict => ids::CODE_IDENTITY_CRISIS,
            Category::PairedCoupling => ids::CODE_CODEPENDENT,
            Category::Deprecated => ids::CODE_ABANDONMENT,
            Category::Cycle => ids::CODE_TOXIC_CYCLE,
            Category::PeerCounseling => ids::CODE_PEER_PRESSURE,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One detected dependency pattern. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub category: Category,
    /// Primary package name (or the patient name for manifest-wide findings).
    pub subject: String,
    /// Second package name, for pair findings.
    pub related: Option<String>,
    /// Major version tokens seen for the subject, for version conflicts.
    pub observed_versions: BTreeSet<String>,
    /// Number of entries involved, for peer counseling.
    pub count: Option<usize>,
}

impl Finding {
    fn new(category: Category, subject: impl Into<String>) -> Self {
        Self {
            category,
            subject: subject.into(),
            related: None,
            observed_versions: BTreeSet::new(),
            count: None,
        }
    }

    pub fn version_conflict(name: impl Into<String>, tokens: BTreeSet<String>) -> Self {
        Self {
            observed_versions: tokens,
            ..Self::new(Category::VersionConflict, name)
        }
    }

    pub fn paired_coupling(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            related: Some(right.into()),
            ..Self::new(Category::PairedCoupling, left)
        }
    }

    pub fn deprecated(name: impl Into<String>) -> Self {
        Self::new(Category::Deprecated, name)
    }

    pub fn cycle(subject: impl Into<String>) -> Self {
        Self::new(Category::Cycle, subject)
    }

    pub fn peer_counseling(subject: impl Into<String>, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::new(Category::PeerCounseling, subject)
        }
    }
}
