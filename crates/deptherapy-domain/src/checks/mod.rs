use crate::model::ManifestModel;
use crate::policy::EffectiveConfig;
use deptherapy_types::Finding;

mod deprecated;
mod paired_coupling;
mod peer_counseling;
mod utils;
mod version_conflict;


pub use utils::major_token;

/// Run every enabled check in display order.
pub fn run_all(model: &ManifestModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    version_conflict::run(model, cfg, out);
    paired_coupling::run(model, cfg, out);
    deprecated::run(model, cfg, out);
    peer_counseling::run(model, cfg, out);
}
