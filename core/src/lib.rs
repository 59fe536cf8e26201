pub mod catalog;
pub mod config;
pub mod playback;
pub mod sampler;
pub mod scheduler;
pub mod stochastic;

// Re-exports for convenience
pub use catalog::{AudioCatalog, AudioCue, CatalogError, Category};
pub use config::{AppConfig, ConfigError};
pub use playback::{PlaybackEngine, PlaybackError};
pub use scheduler::{Phase, Scheduler, SchedulerError};
pub use stochastic::{RngSource, Stochastic};
