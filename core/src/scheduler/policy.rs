//! Category follow-up policy
//!
//! Category is a proxy for threat severity: Primary cues may escalate to
//! the reserved threat cue, Secondary adds a fixed cooldown, Neutral does
//! nothing. The probability and cooldown are fixed policy constants.

use crate::catalog::Category;
use crate::playback::PlaybackEngine;
use crate::sampler;
use crate::stochastic::Stochastic;

use super::error::{Phase, SchedulerError};
use super::Scheduler;

/// Chance that a Primary cue is followed by the escalation cue
pub(super) const ESCALATION_CHANCE: f64 = 0.75;

/// Fixed cooldown after Primary and Secondary follow-ups, in seconds
const FOLLOW_UP_COOLDOWN_SECS: f64 = 2.0;

/// Pause before the escalation check: N(2, 1²), clamped at zero
const PRIMARY_PAUSE_MEAN: f64 = 2.0;
const PRIMARY_PAUSE_STDDEV: f64 = 1.0;

impl<S: Stochastic, E: PlaybackEngine> Scheduler<S, E> {
    /// Apply the follow-up behavior for the category of the cue that just
    /// finished playing. The escalation cue itself never reaches here: it
    /// is not part of the selectable pool.
    pub(super) async fn follow_up(&mut self, category: Category) -> Result<(), SchedulerError> {
        match category {
            Category::Primary => self.primary_follow_up().await,
            Category::Secondary => {
                tracing::debug!("Secondary cue, fixed cooldown");
                self.wait_secs(FOLLOW_UP_COOLDOWN_SECS).await
            }
            Category::Neutral | Category::Escalation => Ok(()),
        }
    }

    async fn primary_follow_up(&mut self) -> Result<(), SchedulerError> {
        let pause = sampler::sample(
            &mut self.source,
            PRIMARY_PAUSE_MEAN,
            PRIMARY_PAUSE_STDDEV,
            Some(0.0),
        );
        tracing::debug!(seconds = pause, "Primary cue, pausing before escalation check");
        self.wait_secs(pause).await?;

        if self.source.fraction() < ESCALATION_CHANCE {
            let cue = self.catalog.escalation().clone();
            tracing::info!(cue = %cue.id, "Escalating to threat cue");
            match self.play_blocking(&cue, Phase::Escalation).await {
                Ok(()) => {}
                Err(SchedulerError::Cancelled) => return Err(SchedulerError::Cancelled),
                // A broken escalation asset must not take down an
                // unattended run; the selected-cue path stays fatal.
                Err(err) => {
                    tracing::warn!(error = %err, "Escalation playback failed, continuing");
                }
            }
        } else {
            tracing::debug!("Escalation check not met");
        }

        // Cooldown applies whether or not the escalation fired
        self.wait_secs(FOLLOW_UP_COOLDOWN_SECS).await
    }
}
