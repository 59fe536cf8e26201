//! Playback scheduler
//!
//! The control loop of the system: wait a stochastic gap, pick one cue
//! uniformly from the selectable pool, play it to completion, then apply
//! the category follow-up policy. Repeats until the cancellation token
//! fires.
//!
//! Cancellation is checked at every suspension point (each sleep and each
//! playback poll), so a stop request is honored within one poll interval.

mod error;
mod policy;


pub use error::{Phase, SchedulerError};

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::catalog::{AudioCatalog, AudioCue};
use crate::playback::PlaybackEngine;
use crate::sampler;
use crate::stochastic::Stochastic;

/// Gap between cycles: N(10, 3²) seconds, unclamped
const CYCLE_GAP_MEAN: f64 = 10.0;
const CYCLE_GAP_STDDEV: f64 = 3.0;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives playback cycles; owns the engine and the stochastic source for
/// the lifetime of the run.
pub struct Scheduler<S, E> {
    catalog: AudioCatalog,
    source: S,
    engine: E,
    cancel: CancellationToken,
    poll_interval: Duration,
}

impl<S: Stochastic, E: PlaybackEngine> Scheduler<S, E> {
    pub fn new(catalog: AudioCatalog, source: S, engine: E, cancel: CancellationToken) -> Self {
        Self {
            catalog,
            source,
            engine,
            cancel,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the playback/cancellation poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Run cycles until cancelled.
    ///
    /// Cancellation is a clean exit: the engine is stopped and `Ok(())` is
    /// returned. A playback failure of a selected cue is fatal and
    /// propagates; escalation failures are logged and the loop continues.
    pub async fn run(mut self) -> Result<(), SchedulerError> {
        tracing::info!(pool = self.catalog.pool().len(), "Scheduler started");
        loop {
            match self.cycle().await {
                Ok(()) => {}
                Err(SchedulerError::Cancelled) => {
                    self.engine.stop();
                    tracing::info!("Scheduler cancelled, playback released");
                    return Ok(());
                }
                Err(err) => {
                    self.engine.stop();
                    tracing::error!(error = %err, "Scheduler aborting");
                    return Err(err);
                }
            }
        }
    }

    /// One full cycle: Idle → Waiting → Playing → follow-up → Idle
    async fn cycle(&mut self) -> Result<(), SchedulerError> {
        let gap = sampler::sample(&mut self.source, CYCLE_GAP_MEAN, CYCLE_GAP_STDDEV, None);
        tracing::debug!(seconds = gap, "Waiting before next cue");
        self.wait_secs(gap).await?;

        let cue = self.select_cue();
        tracing::info!(cue = %cue.id, category = cue.category.label(), "Playing cue");
        self.play_blocking(&cue, Phase::Selected).await?;

        self.follow_up(cue.category).await
    }

    /// Uniform draw over the whole pool; category weights play no part
    fn select_cue(&mut self) -> AudioCue {
        let len = self.catalog.pool().len();
        let index = self.source.pick(len);
        self.catalog.pool()[index].clone()
    }

    /// Start the cue and hold the caller until output ends, checking
    /// cancellation between polls.
    async fn play_blocking(&mut self, cue: &AudioCue, phase: Phase) -> Result<(), SchedulerError> {
        self.engine
            .start(&cue.asset)
            .map_err(|source| SchedulerError::Playback {
                cue: cue.id.clone(),
                category: cue.category,
                phase,
                source,
            })?;

        while self.engine.is_busy() {
            tokio::select! {
                _ = self.cancel.cancelled() => return Err(SchedulerError::Cancelled),
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
        Ok(())
    }

    /// Cancellable sleep. Non-positive waits (possible for the unclamped
    /// cycle gap) complete immediately.
    async fn wait_secs(&self, secs: f64) -> Result<(), SchedulerError> {
        if secs <= 0.0 {
            tracing::debug!(seconds = secs, "Non-positive wait, skipping sleep");
            return Ok(());
        }
        tokio::select! {
            _ = self.cancel.cancelled() => Err(SchedulerError::Cancelled),
            _ = tokio::time::sleep(Duration::from_secs_f64(secs)) => Ok(()),
        }
    }
}
