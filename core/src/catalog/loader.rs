//! Directory enumeration and catalog construction
//!
//! Assets follow the generator's naming convention: `cat1_*`, `cat2_*` and
//! `cat3_*` for the Primary/Secondary/Neutral categories, plus a single
//! `threat.*` escalation cue, all in one flat directory.

use std::path::Path;

use super::cue::{AudioCue, Category};
use super::error::CatalogError;

/// Extensions the playback engine can decode
const SUPPORTED_EXTENSIONS: [&str; 3] = ["wav", "ogg", "mp3"];

/// Categorized cue catalog, built once at startup
#[derive(Debug, Clone)]
pub struct AudioCatalog {
    pool: Vec<AudioCue>,
    escalation: AudioCue,
}

impl AudioCatalog {
    /// Scan `dir` (non-recursive) and build the catalog.
    ///
    /// Fails when no selectable cue is present or when the escalation cue
    /// is missing; the scheduler must not start on a broken catalog.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut pool = Vec::new();
        let mut escalation = None;

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(cue) = classify(&path) else { continue };
            match cue.category {
                Category::Escalation => {
                    if escalation.is_none() {
                        escalation = Some(cue);
                    }
                }
                _ => pool.push(cue),
            }
        }

        if pool.is_empty() {
            return Err(CatalogError::EmptyPool {
                path: dir.to_path_buf(),
            });
        }
        let escalation = escalation.ok_or_else(|| CatalogError::MissingEscalation {
            path: dir.to_path_buf(),
        })?;

        // Stable ordering so selection indices are reproducible under a
        // seeded stochastic source
        pool.sort_by(|a, b| a.id.cmp(&b.id));

        let catalog = Self::from_parts(pool, escalation);
        tracing::info!(
            primary = catalog.count(Category::Primary),
            secondary = catalog.count(Category::Secondary),
            neutral = catalog.count(Category::Neutral),
            escalation = %catalog.escalation.id,
            "Audio catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from already-classified cues. Callers uphold the
    /// non-empty-pool invariant; `load` is the validating entry point.
    pub(crate) fn from_parts(pool: Vec<AudioCue>, escalation: AudioCue) -> Self {
        Self { pool, escalation }
    }

    /// Selectable cues: the Primary + Secondary + Neutral union.
    /// The escalation cue is deliberately excluded.
    pub fn pool(&self) -> &[AudioCue] {
        &self.pool
    }

    /// The reserved threat cue, reachable only via the follow-up policy
    pub fn escalation(&self) -> &AudioCue {
        &self.escalation
    }

    /// Number of selectable cues tagged with `category`
    pub fn count(&self, category: Category) -> usize {
        self.pool.iter().filter(|c| c.category == category).count()
    }
}

/// Map a file to a cue according to the naming convention.
/// Files outside the convention (or with unsupported extensions) are skipped.
fn classify(path: &Path) -> Option<AudioCue> {
    if !path.is_file() {
        return None;
    }
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;

    let category = if stem.starts_with("cat1_") {
        Category::Primary
    } else if stem.starts_with("cat2_") {
        Category::Secondary
    } else if stem.starts_with("cat3_") {
        Category::Neutral
    } else if stem == "threat" {
        Category::Escalation
    } else {
        return None;
    };

    Some(AudioCue {
        id: stem.to_string(),
        category,
        asset: path.to_path_buf(),
    })
}
