//! Error types for the scheduler loop

use thiserror::Error;

use crate::catalog::Category;
use crate::playback::PlaybackError;

/// Which playback a failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The randomly selected cue of the cycle
    Selected,

    /// The follow-up threat cue
    Escalation,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Selected => f.write_str("selected"),
            Phase::Escalation => f.write_str("escalation"),
        }
    }
}

/// Errors surfaced by the scheduler
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Cooperative stop request; `run` turns this into a clean exit
    #[error("cancelled")]
    Cancelled,

    /// An asset failed to load or play
    #[error("playback of {phase} cue '{cue}' ({category:?}) failed")]
    Playback {
        cue: String,
        category: Category,
        phase: Phase,
        #[source]
        source: PlaybackError,
    },
}
