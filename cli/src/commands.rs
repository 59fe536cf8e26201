//! Command implementations for the heckler binary

use std::path::Path;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use heckler_core::{AppConfig, AudioCatalog, Category, RngSource, Scheduler};

use crate::audio::RodioEngine;

/// Load the catalog and drive the scheduler until Ctrl-C
pub async fn run(config: AppConfig, dir_override: Option<String>) -> Result<(), String> {
    let dir = dir_override.unwrap_or_else(|| config.audio_directory.clone());
    let catalog = AudioCatalog::load(Path::new(&dir)).map_err(|e| e.to_string())?;
    let engine = RodioEngine::new(config.volume).map_err(|e| e.to_string())?;

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, stopping");
            signal_cancel.cancel();
        }
    });

    let scheduler = Scheduler::new(catalog, RngSource::new(), engine, cancel)
        .with_poll_interval(Duration::from_millis(config.poll_interval_ms));
    scheduler.run().await.map_err(|e| e.to_string())
}

/// Print per-category counts and cue identifiers
pub fn list(config: &AppConfig) -> Result<(), String> {
    let catalog =
        AudioCatalog::load(Path::new(&config.audio_directory)).map_err(|e| e.to_string())?;

    for category in [Category::Primary, Category::Secondary, Category::Neutral] {
        println!("{}: {} cues", category.label(), catalog.count(category));
    }
    println!("escalation: {}", catalog.escalation().id);
    for cue in catalog.pool() {
        println!("  {} [{}]", cue.id, cue.category.label());
    }
    Ok(())
}

pub fn show_config(config: &AppConfig) -> Result<(), String> {
    println!("audio_directory = {}", config.audio_directory);
    println!("volume = {}", config.volume);
    println!("poll_interval_ms = {}", config.poll_interval_ms);
    Ok(())
}

pub fn set_directory(mut config: AppConfig, path: String) -> Result<(), String> {
    if !Path::new(&path).is_dir() {
        return Err(format!("not a directory: {path}"));
    }
    config.audio_directory = path;
    config.save().map_err(|e| e.to_string())
}

pub fn set_volume(mut config: AppConfig, volume: u8) -> Result<(), String> {
    if volume > 100 {
        return Err("volume must be between 0 and 100".to_string());
    }
    config.volume = volume;
    config.save().map_err(|e| e.to_string())
}
