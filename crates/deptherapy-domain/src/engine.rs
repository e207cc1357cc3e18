use crate::checks;
use crate::model::ManifestModel;
use crate::policy::EffectiveConfig;
use deptherapy_types::Finding;

/// Run the pattern checks over a manifest.
///
/// Findings keep detection order: version conflicts, pairs, deprecated names, peers.
pub fn detect(model: &ManifestModel, cfg: &EffectiveConfig) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, &mut findings);

    for f in &findings {
        tracing::trace!(category = %f.category, subject = %f.subject, "finding");
    }
    tracing::debug!(
        dependencies = model.dependencies.len(),
        findings = findings.len(),
        "detection finished"
    );

    findings
}
