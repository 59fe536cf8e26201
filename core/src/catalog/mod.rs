//! Audio cue catalog
//!
//! This module provides:
//! - **Cues**: Categorized references to pre-recorded audio assets
//! - **Loader**: Directory enumeration following the generator's naming
//!   convention
//!
//! The catalog is built once at startup and is read-only afterwards. The
//! reserved escalation cue is held apart from the selectable pool so random
//! selection can never draw it.

mod cue;
mod error;
mod loader;

#[cfg(test)]
mod loader_tests;

pub use cue::{AudioCue, Category};
pub use error::CatalogError;
pub use loader::AudioCatalog;
