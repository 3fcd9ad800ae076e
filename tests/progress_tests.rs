//! Integration tests for progress persistence.

use panelwise::learning::ModuleId;
use panelwise::progress::ProgressStore;

#[test]
fn progress_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    let mut store = ProgressStore::default();
    store.record(ModuleId::Introduction, 50);
    store.complete(ModuleId::Hazards);
    store.save_to(&path).unwrap();

    let loaded = ProgressStore::load_from(&path).unwrap();
    assert_eq!(loaded.percent(ModuleId::Introduction), 50);
    assert_eq!(loaded.percent(ModuleId::Hazards), 100);
    assert_eq!(loaded.percent(ModuleId::Assembly), 0);
}

#[test]
fn out_of_range_percents_are_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");

    // A hand-edited file with a percent past 100
    std::fs::write(
        &path,
        r#"{"modules": {"introduction": 150}, "updated_at": null}"#,
    )
    .unwrap();

    let loaded = ProgressStore::load_from(&path).unwrap();
    assert_eq!(loaded.percent(ModuleId::Introduction), 100);
}

#[test]
fn saving_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("progress.json");

    let mut store = ProgressStore::default();
    store.complete(ModuleId::Maintenance);
    store.save_to(&path).unwrap();

    assert!(path.exists());
    let loaded = ProgressStore::load_from(&path).unwrap();
    assert_eq!(loaded.percent(ModuleId::Maintenance), 100);
}

#[test]
fn corrupt_files_surface_a_contextual_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "not json at all").unwrap();

    let error = ProgressStore::load_from(&path).unwrap_err();
    assert!(error.to_string().contains("progress file"));
}
