use camino::Utf8PathBuf;
use std::collections::BTreeSet;

/// Patient name used when the manifest has no usable `name`.
pub const ANONYMOUS_PATIENT: &str = "Anonymous Project";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepGroup {
    Direct,
    Development,
    Peer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub version_range: String,
    pub group: DepGroup,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManifestModel {
    pub path: Utf8PathBuf,
    /// `name` from the manifest, if present.
    pub name: Option<String>,
    pub dependencies: Vec<DependencySpec>,
}

impl ManifestModel {
    pub fn patient_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS_PATIENT)
    }

    pub fn group(&self, group: DepGroup) -> impl Iterator<Item = &DependencySpec> {
        self.dependencies.iter().filter(move |d| d.group == group)
    }

    pub fn count(&self, group: DepGroup) -> usize {
        self.group(group).count()
    }

    /// Names declared as direct or development dependencies.
    pub fn installed_names(&self) -> BTreeSet<&str> {
        self.dependencies
            .iter()
            .filter(|d| d.group != DepGroup::Peer)
            .map(|d| d.name.as_str())
            .collect()
    }
}
