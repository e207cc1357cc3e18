use crate::checks::utils::{build_allowlist, is_allowed};
use crate::model::ManifestModel;
use crate::policy::EffectiveConfig;
use deptherapy_types::{Category, Finding};

pub fn run(model: &ManifestModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(Category::PairedCoupling) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    let installed = model.installed_names();

    for (left, right) in &cfg.rules.pairs {
        if !installed.contains(left.as_str()) || !installed.contains(right.as_str()) {
            continue;
        }
        // Either side being allowlisted excuses the pair.
        if is_allowed(allow.as_ref(), left) || is_allowed(allow.as_ref(), right) {
            continue;
        }
        out.push(Finding::paired_coupling(left.as_str(), right.as_str()));
    }
}
