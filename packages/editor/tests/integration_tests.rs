//! Integration tests for editor crate

use pressroom_editor::{
    Component, ComponentId, ComponentPatch, ComponentType, EditorConfig, EditorStore, FileStorage,
    IdGenerator, LayoutStorage, MemoryStorage, PageLayout, StorageError,
};

fn sample_layout(page_id: &str) -> PageLayout {
    let mut ids = IdGenerator::new(page_id);
    PageLayout::new(
        page_id,
        vec![
            Component::new(ids.new_id(), ComponentType::Hero),
            Component::new(ids.new_id(), ComponentType::ProductGrid),
            Component::new(ids.new_id(), ComponentType::CallToAction),
        ],
    )
}

#[test]
fn test_layout_lifecycle_with_memory_storage() -> anyhow::Result<()> {
    let mut storage = MemoryStorage::new();
    storage.save(&sample_layout("home"))?;

    // Load into a fresh editor
    let mut store = EditorStore::new();
    store.load(storage.load("home")?)?;
    assert_eq!(store.page_id(), Some("home"));
    assert_eq!(store.components().len(), 3);
    assert!(!store.can_undo());
    assert!(!store.is_dirty());

    // Edit
    let grid_id = store.components()[1].id.clone();
    store.update_component(grid_id.clone(), ComponentPatch::name("Best sellers"))?;
    store.move_component(1, 0)?;
    assert!(store.is_dirty());

    // Save
    let version = storage.save(&store.layout(None)?)?;
    store.mark_saved();
    assert_eq!(version, 2);
    assert!(!store.is_dirty());

    let stored = storage.load("home")?;
    assert_eq!(stored.components[0].id, grid_id);
    assert_eq!(stored.components[0].name, "Best sellers");

    Ok(())
}

#[test]
fn test_file_storage_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut storage = FileStorage::new(dir.path().join("pages"));
    assert!(storage.list()?.is_empty());

    let layout = sample_layout("landing");
    assert_eq!(storage.save(&layout)?, 1);
    assert_eq!(storage.save(&layout)?, 2);

    let loaded = storage.load("landing")?;
    assert_eq!(loaded.version, 2);
    assert_eq!(loaded.components, layout.components);
    assert_eq!(storage.list()?, vec!["landing".to_string()]);

    assert!(matches!(
        storage.load("missing"),
        Err(StorageError::PageNotFound(_))
    ));

    Ok(())
}

#[test]
fn test_loading_resets_history_and_selection() -> anyhow::Result<()> {
    let mut store = EditorStore::new();
    store.add_component(Component::new(ComponentId::new("temp")?, ComponentType::Text))?;
    store.set_selected_component(Some(ComponentId::new("temp")?));
    store.set_is_dragging(true);

    store.load(sample_layout("home"))?;

    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert!(store.selected_component_id().is_none());
    assert!(!store.is_dragging());
    assert_eq!(store.components().len(), 3);

    Ok(())
}

#[test]
fn test_configured_history_limit() -> anyhow::Result<()> {
    let config = EditorConfig::from_json(r#"{ "historyLimit": 3 }"#)?;
    let mut store = EditorStore::with_config(config)?;
    let mut ids = IdGenerator::new("home");

    for _ in 0..10 {
        store.add_component(Component::new(ids.new_id(), ComponentType::Text))?;
    }

    assert_eq!(store.history().undo_levels(), 3);
    while store.undo() {}
    assert_eq!(store.components().len(), 7);

    Ok(())
}

#[test]
fn test_resumed_ids_do_not_collide_after_load() -> anyhow::Result<()> {
    let layout = sample_layout("home");
    let mut store = EditorStore::new();
    store.load(layout)?;

    let mut ids = IdGenerator::new("home");
    ids.resume_after(store.components().iter().map(|c| &c.id));

    let added = store.add_component(Component::new(ids.new_id(), ComponentType::Text))?;
    assert!(added);
    assert_eq!(store.components().len(), 4);

    Ok(())
}
