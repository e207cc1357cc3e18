use crate::model::DeptherapyConfigV1;
use anyhow::Context;
use deptherapy_domain::policy::{CheckPolicy, EffectiveConfig};
use deptherapy_types::Category;
use globset::Glob;
use std::time::Duration;

pub const DEFAULT_PROBE_DEPTH: u32 = 10;
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CYCLE_INDICATORS: &[&str] = &["circular", "cycle"];

#[cfg(windows)]
pub const DEFAULT_PROBE_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const DEFAULT_PROBE_PROGRAM: &str = "npm";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// `--no-probe` on the command line.
    pub disable_probe: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeSettings {
    pub enabled: bool,
    pub program: String,
    pub depth: u32,
    pub timeout: Duration,
    pub indicators: Vec<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: DEFAULT_PROBE_PROGRAM.to_string(),
            depth: DEFAULT_PROBE_DEPTH,
            timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            indicators: DEFAULT_CYCLE_INDICATORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub probe: ProbeSettings,
}

pub fn resolve_config(
    cfg: DeptherapyConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    // per-check overrides
    for (code, cc) in cfg.checks.iter() {
        let category = Category::from_code(code).with_context(|| {
            format!(
                "unknown check: {code} (expected one of {})",
                Category::ALL.map(Category::code).join(", ")
            )
        })?;
        let entry = effective
            .checks
            .entry(category)
            .or_insert_with(CheckPolicy::enabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(code, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    // rule tables
    for (a, b) in &cfg.rules.extra_pairs {
        if a.trim().is_empty() || b.trim().is_empty() {
            anyhow::bail!("rules.extra_pairs entries need two package names");
        }
    }
    effective
        .rules
        .extend_pairs(cfg.rules.extra_pairs.iter().cloned());
    effective
        .rules
        .extend_deprecated(cfg.rules.extra_deprecated.iter().cloned());

    // probe
    let mut probe = ProbeSettings::default();
    if let Some(enabled) = cfg.probe.enabled {
        probe.enabled = enabled;
    }
    if let Some(program) = cfg.probe.program {
        if program.trim().is_empty() {
            anyhow::bail!("probe.program must not be empty");
        }
        probe.program = program;
    }
    if let Some(depth) = cfg.probe.depth {
        probe.depth = depth;
    }
    if let Some(ms) = cfg.probe.timeout_ms {
        if ms == 0 {
            anyhow::bail!("probe.timeout_ms must be greater than zero");
        }
        probe.timeout = Duration::from_millis(ms);
    }
    if let Some(indicators) = cfg.probe.indicators {
        probe.indicators = indicators
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();
    }
    if overrides.disable_probe {
        probe.enabled = false;
    }

    Ok(ResolvedConfig { effective, probe })
}

fn validate_allowlist(code: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid allow glob for {code}: {pattern}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    fn resolve(text: &str) -> anyhow::Result<ResolvedConfig> {
        resolve_config(parse_config_toml(text)?, Overrides::default())
    }

    #[test]
    fn empty_config_enables_everything() {
        let resolved = resolve("").expect("resolve");
        for category in Category::ALL {
            assert!(resolved.effective.check_policy(category).is_some());
        }
        assert_eq!(resolved.probe, ProbeSettings::default());
    }

    #[test]
    fn checks_can_be_disabled_and_allowlisted() {
        let resolved = resolve(
            r#"
[checks.codependent]
enabled = false

[checks.abandonment]
allow = ["request*"]
"#,
        )
        .expect("resolve");

        assert!(
            resolved
                .effective
                .check_policy(Category::PairedCoupling)
                .is_none()
        );
        let policy = resolved
            .effective
            .check_policy(Category::Deprecated)
            .expect("enabled");
        assert_eq!(policy.allow, vec!["request*".to_string()]);
    }

    #[test]
    fn unknown_check_is_rejected() {
        let err = resolve("[checks.hugs]\nenabled = true\n").unwrap_err();
        assert!(format!("{err:#}").contains("unknown check: hugs"));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let err = resolve("[checks.codependent]\nallow = [\"[\"]\n").unwrap_err();
        assert!(format!("{err:#}").contains("invalid allow glob for codependent"));
    }

    #[test]
    fn rules_extend_builtin_tables() {
        let resolved = resolve(
            r#"
[rules]
extra_pairs = [["left-pad", "right-pad"]]
extra_deprecated = ["leftpad"]
"#,
        )
        .expect("resolve");

        let rules = &resolved.effective.rules;
        assert!(
            rules
                .pairs
                .contains(&("left-pad".to_string(), "right-pad".to_string()))
        );
        assert!(rules.deprecated.contains(&"leftpad".to_string()));
    }

    #[test]
    fn probe_settings_and_override() {
        let cfg = parse_config_toml(
            r#"
[probe]
program = "pnpm"
depth = 3
timeout_ms = 500
indicators = ["Cyclic", ""]
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg.clone(), Overrides::default()).expect("resolve");
        assert!(resolved.probe.enabled);
        assert_eq!(resolved.probe.program, "pnpm");
        assert_eq!(resolved.probe.depth, 3);
        assert_eq!(resolved.probe.timeout, Duration::from_millis(500));
        assert_eq!(resolved.probe.indicators, vec!["Cyclic".to_string()]);

        let resolved = resolve_config(
            cfg,
            Overrides {
                disable_probe: true,
            },
        )
        .expect("resolve");
        assert!(!resolved.probe.enabled);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(resolve("[probe]\ntimeout_ms = 0\n").is_err());
    }
}
