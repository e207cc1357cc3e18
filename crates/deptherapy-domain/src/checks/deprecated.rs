use crate::checks::utils::{build_allowlist, is_allowed};
use crate::model::ManifestModel;
use crate::policy::EffectiveConfig;
use deptherapy_types::{Category, Finding};

pub fn run(model: &ManifestModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(Category::Deprecated) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);
    let installed = model.installed_names();

    for name in &cfg.rules.deprecated {
        if !installed.contains(name.as_str()) {
            continue;
        }
        if is_allowed(allow.as_ref(), name) {
            continue;
        }
        out.push(Finding::deprecated(name.as_str()));
    }
}
