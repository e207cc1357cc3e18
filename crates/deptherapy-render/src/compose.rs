use crate::model::{Report, SessionInfo};
use crate::templates;
use deptherapy_types::{Category, Finding};
use rand::Rng;
use rand::seq::IndexedRandom;

pub const MAX_BREAKTHROUGHS: usize = 3;

/// Substitute `{0}`, `{1}`, ... with `args` in order.
pub fn fill(template: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{i}}}"), arg)
        })
}

/// How many breakthrough lines a session with `finding_count` findings gets.
pub fn breakthrough_count(finding_count: usize) -> usize {
    finding_count.min(MAX_BREAKTHROUGHS)
}

/// Compose the session report. Cannot fail.
pub fn compose<R: Rng + ?Sized>(
    findings: &[Finding],
    session: &SessionInfo,
    rng: &mut R,
) -> Report {
    let mut lines = vec![
        "=== Dependency Therapy Session ===".to_string(),
        format!("Patient: {}", session.patient_name),
        format!(
            "Dependencies: {} total ({} dev)",
            session.total_deps, session.dev_deps
        ),
        String::new(),
    ];

    if findings.is_empty() {
        lines.push(templates::MAINTENANCE.to_string());
        return Report {
            lines,
            finding_count: 0,
        };
    }

    lines.push("Diagnosis:".to_string());
    for finding in findings {
        lines.push(format!("  - {}", diagnose(finding, rng)));
    }

    lines.push(String::new());
    lines.push("Breakthroughs:".to_string());
    let picked: Vec<&str> = templates::BREAKTHROUGHS
        .choose_multiple(rng, breakthrough_count(findings.len()))
        .copied()
        .collect();
    for template in picked {
        let a = pick(templates::CELEBRITY_PACKAGES, rng);
        let b = pick(templates::CELEBRITY_PACKAGES, rng);
        lines.push(format!("  * {}", fill(template, &[a, b])));
    }

    lines.push(String::new());
    lines.push("Treatment plan:".to_string());
    let mut seen: Vec<Category> = Vec::new();
    for finding in findings {
        if seen.contains(&finding.category) {
            continue;
        }
        seen.push(finding.category);
        lines.push(format!(
            "  - [{}] {}",
            finding.category.code(),
            templates::treatment(finding.category)
        ));
    }

    lines.push(String::new());
    lines.push("Prescriptions:".to_string());
    for cmd in templates::PRESCRIPTIONS {
        lines.push(format!("  $ {cmd}"));
    }

    Report {
        lines,
        finding_count: findings.len(),
    }
}

fn diagnose<R: Rng + ?Sized>(finding: &Finding, rng: &mut R) -> String {
    let template = pick(templates::for_category(finding.category), rng);
    let subject = finding.subject.as_str();
    match finding.category {
        Category::VersionConflict => {
            let text = fill(template, &[subject, subject]);
            if finding.observed_versions.is_empty() {
                text
            } else {
                let majors: Vec<&str> = finding
                    .observed_versions
                    .iter()
                    .map(String::as_str)
                    .collect();
                format!("{text} (majors: {})", majors.join(", "))
            }
        }
        Category::PairedCoupling => {
            let related = finding.related.as_deref().unwrap_or(subject);
            fill(template, &[subject, related])
        }
        Category::Deprecated | Category::Cycle => fill(template, &[subject, subject]),
        Category::PeerCounseling => {
            let count = finding.count.unwrap_or(0).to_string();
            fill(template, &[count.as_str(), count.as_str()])
        }
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
