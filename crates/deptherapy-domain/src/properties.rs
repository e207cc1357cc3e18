//! Property-based tests for the detector.
//!
//! These verify:
//! - empty manifests are always healthy
//! - pair findings do not depend on version ranges
//! - one deprecated finding per listed name, one peer finding per manifest

use crate::engine::detect;
use crate::model::{DepGroup, DependencySpec};
use crate::policy::EffectiveConfig;
use crate::rules::{DEPRECATED_PACKAGES, PAIRED_PACKAGES};
use crate::test_support::{dep, manifest};
use deptherapy_types::Category;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_version_range() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..30, 0u32..30, 0u32..30).prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (0u32..30, 0u32..30).prop_map(|(a, b)| format!("^{a}.{b}.0")),
        (0u32..30, 0u32..30).prop_map(|(a, b)| format!("~{a}.{b}.1")),
        (0u32..30).prop_map(|a| format!("{a}.x")),
        Just("latest".to_string()),
        Just("*".to_string()),
    ]
}

/// Names that never collide with the rule tables.
fn arb_plain_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("zz-[a-z]{1,12}").unwrap()
}

fn arb_group() -> impl Strategy<Value = DepGroup> {
    prop_oneof![Just(DepGroup::Direct), Just(DepGroup::Development)]
}

fn count(findings: &[deptherapy_types::Finding], category: Category) -> usize {
    findings.iter().filter(|f| f.category == category).count()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn empty_manifest_has_no_findings(name in proptest::option::of("[a-z]{1,8}")) {
        let mut model = manifest(Vec::new());
        model.name = name;
        prop_assert!(detect(&model, &EffectiveConfig::default()).is_empty());
    }

    #[test]
    fn known_pair_yields_one_finding_regardless_of_versions(
        pair_idx in 0..PAIRED_PACKAGES.len(),
        left_range in arb_version_range(),
        right_range in arb_version_range(),
        left_group in arb_group(),
        right_group in arb_group(),
    ) {
        let (left, right) = PAIRED_PACKAGES[pair_idx];
        let model = manifest(vec![
            dep(left, &left_range, left_group),
            dep(right, &right_range, right_group),
        ]);

        let findings = detect(&model, &EffectiveConfig::default());
        let pairs: Vec<_> = findings
            .iter()
            .filter(|f| f.category == Category::PairedCoupling)
            .collect();
        prop_assert_eq!(pairs.len(), 1);
        prop_assert_eq!(pairs[0].subject.as_str(), left);
        prop_assert_eq!(pairs[0].related.as_deref(), Some(right));
    }

    #[test]
    fn one_deprecated_finding_per_listed_name(
        picks in prop::sample::subsequence(DEPRECATED_PACKAGES.to_vec(), 0..DEPRECATED_PACKAGES.len()),
        extras in prop::collection::vec(arb_plain_name(), 0..5),
        range in arb_version_range(),
    ) {
        let mut deps: Vec<DependencySpec> = picks
            .iter()
            .map(|n| dep(n, &range, DepGroup::Direct))
            .collect();
        deps.extend(extras.iter().map(|n| dep(n, &range, DepGroup::Development)));
        let model = manifest(deps);

        let findings = detect(&model, &EffectiveConfig::default());
        prop_assert_eq!(count(&findings, Category::Deprecated), picks.len());
    }

    #[test]
    fn peer_group_yields_exactly_one_finding(
        peers in prop::collection::btree_set(arb_plain_name(), 1..10),
        range in arb_version_range(),
    ) {
        let model = manifest(
            peers.iter().map(|n| dep(n, &range, DepGroup::Peer)).collect(),
        );

        let findings = detect(&model, &EffectiveConfig::default());
        prop_assert_eq!(count(&findings, Category::PeerCounseling), 1);
        prop_assert_eq!(findings[0].count, Some(peers.len()));
    }

    #[test]
    fn same_major_across_groups_never_conflicts(
        name in arb_plain_name(),
        major in 0u32..40,
        minor_a in 0u32..20,
        minor_b in 0u32..20,
    ) {
        let model = manifest(vec![
            dep(&name, &format!("^{major}.{minor_a}.0"), DepGroup::Direct),
            dep(&name, &format!("~{major}.{minor_b}.3"), DepGroup::Development),
        ]);
        prop_assert_eq!(
            count(&detect(&model, &EffectiveConfig::default()), Category::VersionConflict),
            0
        );
    }
}
