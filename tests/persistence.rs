//! Persistence tests
//!
//! Tests for the file-backed binding store and the full registry
//! save/persist/reload round trip.

use chordmap::{
    default_path, Binding, Chord, ConfigStore, FileStore, KeyCode, Modifiers, Registry,
};

fn sample_registry() -> Registry<String> {
    let mut registry = Registry::new();
    registry.add_binding(Binding::new(
        "TogglePanel".to_string(),
        "Show or hide the side panel",
        Some(Chord::new(KeyCode::char('p'), Modifiers::CTRL)),
    ));
    registry.add_binding(Binding::new(
        "Screenshot".to_string(),
        "Capture the current frame",
        Some(Chord::key(KeyCode::F(12))),
    ));
    registry.add_binding(Binding::new(
        "Console".to_string(),
        "Open the debug console",
        None,
    ));
    registry
}

// ========================================================================
// File Store Tests
// ========================================================================

#[test]
fn test_missing_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::load(dir.path().join("bindings.yaml"));
    assert!(store.is_empty());
    assert_eq!(store.get_value("TogglePanel"), None);
}

#[test]
fn test_corrupt_file_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings.yaml");
    std::fs::write(&path, ": not [ valid yaml").unwrap();

    let store = FileStore::load(&path);
    assert!(store.is_empty());
}

#[test]
fn test_persist_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("bindings.yaml");

    let mut store = FileStore::load(&path);
    store.set_value("TogglePanel", "^P");
    store.persist().unwrap();

    assert!(path.exists());
}

#[test]
fn test_persist_then_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings.yaml");

    let mut store = FileStore::load(&path);
    store.set_value("TogglePanel", "^P");
    store.set_value("Console", "");
    store.persist().unwrap();

    let reloaded = FileStore::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get_value("TogglePanel"), Some("^P".to_string()));
    assert_eq!(reloaded.get_value("Console"), Some(String::new()));
}

#[test]
fn test_default_path_shape() {
    if let Some(path) = default_path("chordmap-demo") {
        let s = path.to_string_lossy();
        assert!(s.contains("chordmap-demo"));
        assert!(s.ends_with("bindings.yaml"));
    }
}

// ========================================================================
// Registry Round Trip Tests
// ========================================================================

#[test]
fn test_registry_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings.yaml");

    // First session: rebind an action, unbind another, save
    {
        let mut registry = sample_registry();
        registry
            .get_mut(&"TogglePanel".to_string())
            .unwrap()
            .set_chord(Some(Chord::new(
                KeyCode::char('t'),
                Modifiers::CMD | Modifiers::SHIFT,
            )));
        registry
            .get_mut(&"Screenshot".to_string())
            .unwrap()
            .set_chord(None);

        let mut store = FileStore::load(&path);
        registry.save(&mut store);
        store.persist().unwrap();
    }

    // Second session: fresh registry with defaults, restored from disk
    {
        let mut registry = sample_registry();
        let store = FileStore::load(&path);
        registry.load(Some(&store)).unwrap();

        let panel = registry.get(&"TogglePanel".to_string()).unwrap();
        assert_eq!(panel.label(), "Cmd+Shift+T");

        let screenshot = registry.get(&"Screenshot".to_string()).unwrap();
        assert_eq!(screenshot.chord(), None);

        let console = registry.get(&"Console".to_string()).unwrap();
        assert_eq!(console.chord(), None);
    }
}

#[test]
fn test_untouched_store_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::load(dir.path().join("bindings.yaml"));

    let mut registry = sample_registry();
    registry
        .get_mut(&"TogglePanel".to_string())
        .unwrap()
        .set_chord(None);
    registry.load(Some(&store)).unwrap();

    assert_eq!(
        registry.get(&"TogglePanel".to_string()).unwrap().chord(),
        Some(Chord::new(KeyCode::char('p'), Modifiers::CTRL))
    );
}
