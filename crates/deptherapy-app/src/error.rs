use deptherapy_repo::ManifestError;

/// The two ways a session can end badly.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Manifest missing, unreadable or structurally invalid.
    #[error("could not read the patient's file: {0}")]
    ManifestUnreadable(#[from] ManifestError),

    /// Anything else that went wrong during the session.
    #[error("the session ended unexpectedly: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}
