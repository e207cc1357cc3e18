use crate::checks::utils::{build_allowlist, is_allowed};
use crate::model::{DepGroup, ManifestModel};
use crate::policy::EffectiveConfig;
use deptherapy_types::{Category, Finding};

/// One finding for the whole peer group; the size only shows up in the message.
pub fn run(model: &ManifestModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(Category::PeerCounseling) else {
        return;
    };
    let allow = build_allowlist(&policy.allow);

    let count = model
        .group(DepGroup::Peer)
        .filter(|d| !is_allowed(allow.as_ref(), &d.name))
        .count();
    if count == 0 {
        return;
    }

    out.push(Finding::peer_counseling(model.patient_name(), count));
}
