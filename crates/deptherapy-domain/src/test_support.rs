use crate::model::{DepGroup, DependencySpec, ManifestModel};
use crate::policy::{CheckPolicy, EffectiveConfig};
use camino::Utf8PathBuf;
use deptherapy_types::Category;

pub fn dep(name: &str, version_range: &str, group: DepGroup) -> DependencySpec {
    DependencySpec {
        name: name.to_string(),
        version_range: version_range.to_string(),
        group,
    }
}

pub fn manifest(dependencies: Vec<DependencySpec>) -> ManifestModel {
    ManifestModel {
        path: Utf8PathBuf::from("package.json"),
        name: Some("patient".to_string()),
        dependencies,
    }
}

/// Config with only `category` enabled.
pub fn config_with_check(category: Category) -> EffectiveConfig {
    config_with_check_allow(category, Vec::new())
}

pub fn config_with_check_allow(category: Category, allow: Vec<&str>) -> EffectiveConfig {
    let mut cfg = EffectiveConfig::default();
    for policy in cfg.checks.values_mut() {
        *policy = CheckPolicy::disabled();
    }
    let mut policy = CheckPolicy::enabled();
    policy.allow = allow.into_iter().map(|s| s.to_string()).collect();
    cfg.checks.insert(category, policy);
    cfg
}
