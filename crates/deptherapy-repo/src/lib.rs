//! Repository adapters: read and parse `package.json`.
//!
//! This crate is allowed to do filesystem IO. It does not spawn processes; the cycle probe
//! lives in `deptherapy-probe`.

#![forbid(unsafe_code)]

mod parse;

use camino::{Utf8Path, Utf8PathBuf};
use deptherapy_domain::model::ManifestModel;

pub use parse::parse_manifest;

/// Default manifest location, relative to the working directory.
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("no manifest found at {path}")]
    Missing { path: Utf8PathBuf },

    #[error("failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON")]
    Json {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {reason}")]
    Shape { path: Utf8PathBuf, reason: String },
}

impl ManifestError {
    pub fn path(&self) -> &Utf8Path {
        match self {
            ManifestError::Missing { path }
            | ManifestError::Read { path, .. }
            | ManifestError::Json { path, .. }
            | ManifestError::Shape { path, .. } => path,
        }
    }
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Utf8Path) -> Result<ManifestModel, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ManifestError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            ManifestError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let model = parse::parse_manifest(path, &text)?;
    tracing::debug!(
        path = %path,
        dependencies = model.dependencies.len(),
        "manifest loaded"
    );
    Ok(model)
}
