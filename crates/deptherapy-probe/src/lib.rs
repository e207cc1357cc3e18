//! Dependency cycle probing.
//!
//! The only implementation that talks to the outside world is [`CommandProbe`], which runs the
//! package manager's tree listing and looks for a cycle indicator in its error output. The
//! session only sees the [`CycleProbe`] trait.

#![forbid(unsafe_code)]

mod command;

pub use command::{CommandOutcome, CommandProbe};

/// Answers one question: does the installed dependency tree contain a cycle?
///
/// Implementations must not fail; anything they cannot interpret is `false`.
pub trait CycleProbe {
    fn detect_cycle(&self) -> bool;
}

/// Probe used when probing is switched off.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledProbe;

impl CycleProbe for DisabledProbe {
    fn detect_cycle(&self) -> bool {
        false
    }
}

/// Probe with a fixed answer.
#[derive(Clone, Copy, Debug)]
pub struct StaticProbe(pub bool);

impl CycleProbe for StaticProbe {
    fn detect_cycle(&self) -> bool {
        self.0
    }
}

/// True when `stderr` mentions any indicator, ignoring ASCII case.
pub fn mentions_cycle(stderr: &str, indicators: &[String]) -> bool {
    let haystack = stderr.to_ascii_lowercase();
    indicators
        .iter()
        .filter(|i| !i.is_empty())
        .any(|i| haystack.contains(&i.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators() -> Vec<String> {
        vec!["circular".to_string(), "cycle".to_string()]
    }

    #[test]
    fn mentions_cycle_is_case_insensitive() {
        assert!(mentions_cycle(
            "npm ERR! Circular dependency detected: a -> b -> a",
            &indicators()
        ));
        assert!(mentions_cycle("npm error CYCLE in tree", &indicators()));
    }

    #[test]
    fn unrelated_errors_are_not_cycles() {
        assert!(!mentions_cycle(
            "npm ERR! missing: react@^18.0.0, required by app@1.0.0",
            &indicators()
        ));
        assert!(!mentions_cycle("anything", &[String::new()]));
    }

    #[test]
    fn fixed_probes() {
        assert!(!DisabledProbe.detect_cycle());
        assert!(StaticProbe(true).detect_cycle());
        assert!(!StaticProbe(false).detect_cycle());
    }
}
