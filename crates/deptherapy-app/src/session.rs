//! The session use case: load, detect, probe, compose.

use crate::SessionError;
use anyhow::Context;
use camino::Utf8Path;
use deptherapy_domain::model::{DepGroup, ManifestModel};
use deptherapy_probe::{CommandProbe, CycleProbe, DisabledProbe};
use deptherapy_render::{Report, SessionInfo};
use deptherapy_settings::{Overrides, ProbeSettings, ResolvedConfig};
use deptherapy_types::{Category, Finding};
use rand::Rng;

/// Input for the session use case.
pub struct SessionInput<'a, R: Rng + ?Sized> {
    /// Path to `package.json`.
    pub manifest_path: &'a Utf8Path,
    pub config: &'a ResolvedConfig,
    pub probe: &'a dyn CycleProbe,
    pub rng: &'a mut R,
}

/// Output from the session use case.
#[derive(Clone, Debug)]
pub struct SessionOutput {
    pub findings: Vec<Finding>,
    pub report: Report,
}

/// Read the config file; only a missing file falls back to defaults (empty text).
pub fn read_config_text(path: &Utf8Path) -> Result<String, SessionError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("read config {path}"))
            .into()),
    }
}

/// Parse config text (empty means defaults) and apply CLI overrides.
pub fn resolve_settings(
    config_text: &str,
    overrides: Overrides,
) -> Result<ResolvedConfig, SessionError> {
    let cfg = if config_text.trim().is_empty() {
        deptherapy_settings::DeptherapyConfigV1::default()
    } else {
        deptherapy_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved =
        deptherapy_settings::resolve_config(cfg, overrides).context("resolve config")?;
    Ok(resolved)
}

/// Choose the cycle probe for a manifest; it runs next to the manifest.
pub fn build_probe(settings: &ProbeSettings, manifest_path: &Utf8Path) -> Box<dyn CycleProbe> {
    if !settings.enabled {
        return Box::new(DisabledProbe);
    }
    let working_dir = manifest_path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .map(Utf8Path::to_path_buf);
    Box::new(CommandProbe {
        program: settings.program.clone(),
        depth: settings.depth,
        working_dir,
        timeout: settings.timeout,
        indicators: settings.indicators.clone(),
    })
}

/// Run the session use case.
pub fn run_session<R: Rng + ?Sized>(
    input: SessionInput<'_, R>,
) -> Result<SessionOutput, SessionError> {
    let model = deptherapy_repo::load_manifest(input.manifest_path)?;

    let mut findings = deptherapy_domain::detect(&model, &input.config.effective);

    if input.config.effective.check_policy(Category::Cycle).is_some()
        && input.probe.detect_cycle()
    {
        findings.push(Finding::cycle(model.patient_name()));
    }

    let session = session_info(&model);
    let report = deptherapy_render::compose(&findings, &session, input.rng);

    tracing::info!(
        patient = %session.patient_name,
        findings = findings.len(),
        "session complete"
    );

    Ok(SessionOutput { findings, report })
}

fn session_info(model: &ManifestModel) -> SessionInfo {
    SessionInfo {
        patient_name: model.patient_name().to_string(),
        // A name declared in both groups is one package.
        total_deps: model.installed_names().len(),
        dev_deps: model.count(DepGroup::Development),
    }
}

/// Map a session result to a process exit code: 0 = report produced, 1 = any error.
pub fn session_exit_code<T>(result: &Result<T, SessionError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
