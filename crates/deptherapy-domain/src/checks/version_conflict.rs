use crate::checks::utils::{build_allowlist, is_allowed, major_token};
use crate::model::{DepGroup, ManifestModel};
use crate::policy::EffectiveConfig;
use deptherapy_types::{Category, Finding};
use std::collections::{BTreeMap, BTreeSet};

/// Compare major tokens of the direct and development entries for each package name.
pub fn run(model: &ManifestModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(Category::VersionConflict) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    // name -> set of major tokens
    let mut tokens: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for dep in &model.dependencies {
        if dep.group == DepGroup::Peer {
            continue;
        }
        let token = major_token(&dep.version_range);
        // Tags, paths and git urls carry no comparable major.
        if token.is_empty() {
            continue;
        }
        tokens.entry(dep.name.as_str()).or_default().insert(token);
    }

    for (name, observed) in tokens {
        if observed.len() <= 1 {
            continue;
        }
        if is_allowed(allow.as_ref(), name) {
            continue;
        }
        out.push(Finding::version_conflict(name, observed));
    }
}
