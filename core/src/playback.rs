//! Playback engine seam
//!
//! The scheduler drives audio output through this trait. The binary crate
//! provides a rodio-backed implementation; tests use a recording fake.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the playback collaborator
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to open audio asset {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode audio asset {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("audio output device unavailable: {reason}")]
    Device { reason: String },
}

/// Single-voice audio output.
///
/// `start` begins playback of one asset and returns immediately; the caller
/// polls `is_busy` until output ends. `stop` halts any in-flight playback
/// and must be safe to call repeatedly.
pub trait PlaybackEngine {
    fn start(&mut self, asset: &Path) -> Result<(), PlaybackError>;

    fn is_busy(&self) -> bool;

    fn stop(&mut self);
}
