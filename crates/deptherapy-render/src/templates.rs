//! Static message tables.
//!
//! Placeholders are positional: `{0}` and `{1}`.

use deptherapy_types::Category;

pub const VERSION_CONFLICT: &[&str] = &[
    "{0} is having an identity crisis: it can't decide which major version it wants to be.",
    "{0} keeps introducing itself differently depending on who asks. We call that {1} fatigue.",
    "Part of {0} wants to grow up; the other part of {0} is stuck in the past.",
];

pub const PAIRED_COUPLING: &[&str] = &[
    "{0} and {1} are codependent. They can't go anywhere without each other.",
    "{0} never installs without {1}. Have you considered giving them some space?",
    "Whenever {0} shows up, {1} is right behind. Classic enmeshment.",
];

pub const DEPRECATED: &[&str] = &[
    "{0} has been deprecated, yet you're still holding on. It's time to let go.",
    "You keep texting {0}, but {0} stopped maintaining this relationship years ago.",
    "{0} has moved on. Its maintainers have moved on. Have you?",
];

pub const CYCLE: &[&str] = &[
    "{0} is stuck in a toxic cycle: dependencies that depend on each other in circles.",
    "The dependency tree of {0} keeps coming back to the same argument. Round and round.",
];

pub const PEER_COUNSELING: &[&str] = &[
    "You have {0} peer dependencies. That's a lot of peer pressure.",
    "{0} peer dependencies expect you to bring your own versions. Boundaries are healthy.",
];

/// Templates for a category. Every category has at least one.
pub fn for_category(category: Category) -> &'static [&'static str] {
    match category {
        Category::VersionConflict => VERSION_CONFLICT,
        Category::PairedCoupling => PAIRED_COUPLING,
        Category::Deprecated => DEPRECATED,
        Category::Cycle => CYCLE,
        Category::PeerCounseling => PEER_COUNSELING,
    }
}

/// Decorative lines; at least three so up to three can be drawn without replacement.
pub const BREAKTHROUGHS: &[&str] = &[
    "Breakthrough: {0} finally admitted it has been jealous of {1} all along.",
    "Breakthrough: {0} and {1} agreed to communicate through a stable API.",
    "Breakthrough: {0} realised it doesn't need {1} to feel complete.",
    "Breakthrough: {0} apologised to {1} for that breaking change.",
    "Breakthrough: {0} learned that {1} was only ever a transitive friend.",
];

/// Well-known packages used to fill breakthrough lines.
pub const CELEBRITY_PACKAGES: &[&str] = &[
    "lodash",
    "express",
    "react",
    "chalk",
    "axios",
    "moment",
    "webpack",
    "typescript",
    "jquery",
    "left-pad",
];

/// One advice line per category.
pub fn treatment(category: Category) -> &'static str {
    match category {
        Category::VersionConflict => {
            "Pick one major version per package and align dependencies with devDependencies."
        }
        Category::PairedCoupling => {
            "Keep coupled packages on matching versions and upgrade them together."
        }
        Category::Deprecated => "Replace deprecated packages with maintained alternatives.",
        Category::Cycle => "Break the cycle by extracting shared code into its own package.",
        Category::PeerCounseling => {
            "Document your peer dependencies so consumers know what to bring."
        }
    }
}

/// Generic remediation commands, printed after the advice lines.
pub const PRESCRIPTIONS: &[&str] = &[
    "npm dedupe",
    "npm outdated",
    "npm audit fix",
    "rm -rf node_modules package-lock.json && npm install",
];

pub const MAINTENANCE: &str =
    "No issues detected. Your dependencies are emotionally stable. Come back for a check-up after your next npm install.";
