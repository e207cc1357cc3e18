//! Shared test utilities for the deptherapy workspace.
//!
//! Used by the app unit tests and the CLI integration tests, which cannot share a
//! `#[cfg(test)]` module.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Path to the repo-level `tests/fixtures` directory.
pub fn fixtures_dir() -> Utf8PathBuf {
    // crates/deptherapy-test-util -> crates -> repo root
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("test-util crate should live two levels below the repo root")
        .join("tests")
        .join("fixtures")
}

/// Directory of a named fixture.
pub fn fixture(name: &str) -> Utf8PathBuf {
    fixtures_dir().join(name)
}

/// Write `json` as `package.json` inside `dir` and return its path.
pub fn write_manifest(dir: &TempDir, json: &str) -> Utf8PathBuf {
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .expect("temp dir should be valid UTF-8");
    let path = root.join("package.json");
    std::fs::write(&path, json).expect("write package.json");
    path
}

/// Lines of `text` that start with `prefix`.
pub fn lines_starting_with<'a>(text: &'a str, prefix: &str) -> Vec<&'a str> {
    text.lines().filter(|l| l.starts_with(prefix)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_dir_points_at_repo_tests() {
        let dir = fixtures_dir();
        assert!(dir.ends_with("tests/fixtures"));
    }

    #[test]
    fn write_manifest_round_trips() {
        let tmp = TempDir::new().expect("tempdir");
        let path = write_manifest(&tmp, "{}");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{}");
        assert_eq!(path.file_name(), Some("package.json"));
    }

    #[test]
    fn lines_starting_with_filters() {
        let text = "a1\nb\na2\n";
        assert_eq!(lines_starting_with(text, "a"), vec!["a1", "a2"]);
    }
}
