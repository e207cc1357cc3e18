//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CheckConfig, DeptherapyConfigV1, ProbeConfig, RulesConfig};
pub use resolve::{Overrides, ProbeSettings, ResolvedConfig};

/// Parse `deptherapy.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<DeptherapyConfigV1> {
    let cfg: DeptherapyConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + file + overrides).
pub fn resolve_config(
    cfg: DeptherapyConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
