//! Error types for catalog construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors during catalog loading; all of these are startup-fatal
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read audio directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no selectable cues found in {path}")]
    EmptyPool { path: PathBuf },

    #[error("escalation cue (threat.*) missing from {path}")]
    MissingEscalation { path: PathBuf },
}
