//! Tests for catalog loading and the asset naming convention

use std::fs::File;

use tempfile::TempDir;

use super::{AudioCatalog, CatalogError, Category};

fn touch(dir: &TempDir, name: &str) {
    File::create(dir.path().join(name)).expect("create fixture file");
}

/// A small but complete asset directory
fn populated_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    touch(&dir, "cat1_item1_voice1.wav");
    touch(&dir, "cat1_item2_voice1.wav");
    touch(&dir, "cat2_item1_voice1.wav");
    touch(&dir, "cat3_item1_voice1.wav");
    touch(&dir, "threat.wav");
    dir
}

#[test]
fn test_load_counts_by_category() {
    let dir = populated_dir();
    let catalog = AudioCatalog::load(dir.path()).expect("load catalog");

    assert_eq!(catalog.count(Category::Primary), 2);
    assert_eq!(catalog.count(Category::Secondary), 1);
    assert_eq!(catalog.count(Category::Neutral), 1);
    assert_eq!(catalog.pool().len(), 4);
}

#[test]
fn test_pool_excludes_escalation_cue() {
    let dir = populated_dir();
    let catalog = AudioCatalog::load(dir.path()).expect("load catalog");

    assert!(
        catalog
            .pool()
            .iter()
            .all(|c| c.category != Category::Escalation)
    );
    assert_eq!(catalog.escalation().id, "threat");
    assert_eq!(catalog.escalation().category, Category::Escalation);
}

#[test]
fn test_cue_identifier_and_category_from_filename() {
    let dir = populated_dir();
    let catalog = AudioCatalog::load(dir.path()).expect("load catalog");

    let cue = catalog
        .pool()
        .iter()
        .find(|c| c.id == "cat2_item1_voice1")
        .expect("cat2 cue present");
    assert_eq!(cue.category, Category::Secondary);
    assert_eq!(cue.asset, dir.path().join("cat2_item1_voice1.wav"));
}

#[test]
fn test_empty_directory_fails() {
    let dir = TempDir::new().expect("create temp dir");

    let err = AudioCatalog::load(dir.path()).expect_err("empty directory must fail");
    assert!(matches!(err, CatalogError::EmptyPool { .. }));
}

#[test]
fn test_escalation_alone_is_still_an_empty_pool() {
    let dir = TempDir::new().expect("create temp dir");
    touch(&dir, "threat.wav");

    let err = AudioCatalog::load(dir.path()).expect_err("no selectable cues");
    assert!(matches!(err, CatalogError::EmptyPool { .. }));
}

#[test]
fn test_missing_escalation_fails() {
    let dir = TempDir::new().expect("create temp dir");
    touch(&dir, "cat1_item1_voice1.wav");

    let err = AudioCatalog::load(dir.path()).expect_err("missing threat cue must fail");
    assert!(matches!(err, CatalogError::MissingEscalation { .. }));
}

#[test]
fn test_unrelated_files_are_ignored() {
    let dir = populated_dir();
    touch(&dir, "README.txt");
    touch(&dir, "notes.wav");
    touch(&dir, "cat1_item9_voice9.flac");

    let catalog = AudioCatalog::load(dir.path()).expect("load catalog");
    assert_eq!(catalog.pool().len(), 4);
}

#[test]
fn test_missing_directory_is_a_read_error() {
    let dir = TempDir::new().expect("create temp dir");
    let missing = dir.path().join("does_not_exist");

    let err = AudioCatalog::load(&missing).expect_err("missing directory must fail");
    assert!(matches!(err, CatalogError::ReadDir { .. }));
}
