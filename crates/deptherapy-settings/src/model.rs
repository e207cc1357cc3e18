use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `deptherapy.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown tables are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeptherapyConfigV1 {
    /// Map of category code -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Package name globs the check should leave alone.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Additions to the built-in lookup tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub extra_pairs: Vec<(String, String)>,

    #[serde(default)]
    pub extra_deprecated: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Package manager binary (`npm` by default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Value passed as `--depth=<n>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Substrings of the package manager's stderr that signal a cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<Vec<String>>,
}
