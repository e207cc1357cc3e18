use globset::{Glob, GlobSet, GlobSetBuilder};

pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    // Patterns are validated in deptherapy-settings; anything that slips through is skipped.
    for glob in allow.iter().filter_map(|p| Glob::new(p).ok()) {
        builder.add(glob);
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}

/// Reduce a version range to its leading major token.
///
/// Every character that is not an ASCII digit or `.` is dropped, then the text before the
/// first `.` is kept. `"^18.2.0"` becomes `"18"`, `"latest"` becomes `""`.
pub fn major_token(version_range: &str) -> String {
    let digits: String = version_range
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match digits.split_once('.') {
        Some((major, _)) => major.to_string(),
        None => digits,
    }
}
