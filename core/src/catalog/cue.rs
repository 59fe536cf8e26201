//! Cue and category types

use std::path::PathBuf;

/// Behavioral classification of a cue, driving follow-up policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// High-threat cues; may escalate to the threat cue after playback
    Primary,

    /// Moderate-aggression cues; fixed cooldown after playback
    Secondary,

    /// Benign cues; no follow-up behavior
    Neutral,

    /// The single reserved threat cue, playable only as a follow-up
    Escalation,
}

impl Category {
    /// Short label used in logs and the `list` output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Secondary => "secondary",
            Category::Neutral => "neutral",
            Category::Escalation => "escalation",
        }
    }
}

/// A single pre-recorded cue. Immutable after catalog construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCue {
    /// Identifier derived from the asset file stem, e.g. `cat1_item3_voice2`
    pub id: String,

    /// Behavioral category, tagged once at load time
    pub category: Category,

    /// Path to the audio asset
    pub asset: PathBuf,
}
