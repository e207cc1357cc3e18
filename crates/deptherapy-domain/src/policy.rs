use crate::rules::RuleTables;
use deptherapy_types::Category;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
    /// Glob patterns over package names that the check should leave alone.
    pub allow: Vec<String>,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            allow: Vec::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            allow: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub checks: BTreeMap<Category, CheckPolicy>,
    pub rules: RuleTables,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            checks: Category::ALL
                .into_iter()
                .map(|c| (c, CheckPolicy::enabled()))
                .collect(),
            rules: RuleTables::default(),
        }
    }
}

impl EffectiveConfig {
    pub fn check_policy(&self, category: Category) -> Option<&CheckPolicy> {
        self.checks.get(&category).filter(|p| p.enabled)
    }
}
