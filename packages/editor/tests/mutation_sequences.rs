//! Tests for sequences of edits against the editor store
//!
//! This tests:
//! - Add/remove inverse
//! - Undo/redo round trips
//! - Branch discard after undo
//! - Move order preservation
//! - Session state never touching history

use pressroom_editor::{
    Component, ComponentId, ComponentPatch, ComponentSettings, ComponentType, EditorMode,
    EditorStore, HeroSettings, IdGenerator, Styles,
};

fn id(raw: &str) -> ComponentId {
    ComponentId::new(raw).unwrap()
}

fn component(raw: &str, kind: ComponentType) -> Component {
    Component::new(id(raw), kind)
}

fn ids(store: &EditorStore) -> Vec<String> {
    store
        .components()
        .iter()
        .map(|c| c.id.to_string())
        .collect()
}

fn history_shape(store: &EditorStore) -> (Vec<Vec<String>>, Vec<Vec<String>>) {
    let to_ids = |list: &[Component]| list.iter().map(|c| c.id.to_string()).collect::<Vec<_>>();
    (
        store.history().past().map(to_ids).collect(),
        store.history().future().map(to_ids).collect(),
    )
}

fn seeded_store(raw_ids: &[&str]) -> EditorStore {
    let mut store = EditorStore::new();
    for raw in raw_ids {
        store
            .add_component(component(raw, ComponentType::Text))
            .unwrap();
    }
    store.clear_history();
    store
}

#[test]
fn test_walkthrough_scenario() {
    let mut store = EditorStore::new();

    store
        .add_component(component("a", ComponentType::Hero))
        .unwrap();
    assert_eq!(ids(&store), vec!["a"]);
    let (past, future) = history_shape(&store);
    assert_eq!(past, vec![Vec::<String>::new()]);
    assert!(future.is_empty());

    store
        .add_component(component("b", ComponentType::Text))
        .unwrap();
    assert_eq!(ids(&store), vec!["a", "b"]);
    let (past, _) = history_shape(&store);
    assert_eq!(past, vec![vec![], vec!["a".to_string()]]);

    assert!(store.undo());
    assert_eq!(ids(&store), vec!["a"]);
    let (past, future) = history_shape(&store);
    assert_eq!(past, vec![Vec::<String>::new()]);
    assert_eq!(future, vec![vec!["a".to_string(), "b".to_string()]]);

    store
        .add_component(component("c", ComponentType::CallToAction))
        .unwrap();
    assert_eq!(ids(&store), vec!["a", "c"]);
    assert_eq!(store.history().redo_levels(), 0);

    assert!(!store.redo());
    assert_eq!(ids(&store), vec!["a", "c"]);
}

#[test]
fn test_add_then_remove_restores_list() {
    let mut store = seeded_store(&["x", "y"]);
    let before = store.components().to_vec();

    store
        .add_component(component("fresh", ComponentType::Features))
        .unwrap();
    store.remove_component(id("fresh")).unwrap();

    assert_eq!(store.components(), before.as_slice());
    assert_eq!(store.history().undo_levels(), 2);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut store = seeded_store(&["a", "b", "c"]);
    let initial = store.components().to_vec();

    store
        .add_component(component("d", ComponentType::ProductGrid))
        .unwrap();
    store
        .update_component(id("b"), ComponentPatch::name("Renamed"))
        .unwrap();
    store.move_component(3, 0).unwrap();
    store.remove_component(id("a")).unwrap();
    store
        .update_component(id("c"), ComponentPatch::hidden(true))
        .unwrap();
    let edited = store.components().to_vec();

    for _ in 0..5 {
        assert!(store.undo());
    }
    assert!(!store.undo());
    assert_eq!(store.components(), initial.as_slice());

    for _ in 0..5 {
        assert!(store.redo());
    }
    assert!(!store.redo());
    assert_eq!(store.components(), edited.as_slice());
}

#[test]
fn test_new_edit_after_undo_discards_future() {
    let mut store = seeded_store(&["a"]);
    for raw in ["b", "c", "d"] {
        store
            .add_component(component(raw, ComponentType::Text))
            .unwrap();
    }

    store.undo();
    store.undo();
    assert_eq!(store.history().redo_levels(), 2);

    store.move_component(1, 0).unwrap();
    assert_eq!(store.history().redo_levels(), 0);
    assert!(!store.can_redo());
    assert!(!store.redo());
    assert_eq!(ids(&store), vec!["b", "a"]);
}

#[test]
fn test_move_preserves_order_of_others() {
    let raw = ["a", "b", "c", "d", "e"];

    for from in 0..raw.len() {
        for to in 0..raw.len() {
            let mut store = seeded_store(&raw);
            let moved = store.components()[from].id.clone();

            store.move_component(from, to).unwrap();

            assert_eq!(store.components()[to].id, moved);

            let mut expected_rest: Vec<&str> = raw.to_vec();
            expected_rest.remove(from);
            let actual_rest: Vec<String> = store
                .components()
                .iter()
                .filter(|c| c.id != moved)
                .map(|c| c.id.to_string())
                .collect();
            assert_eq!(actual_rest, expected_rest);
        }
    }
}

#[test]
fn test_update_changes_only_patched_field() {
    let mut store = EditorStore::new();
    let mut hero = component("hero", ComponentType::Hero);
    hero.styles = Styles {
        padding: Some("48px".to_string()),
        ..Default::default()
    };
    store.add_component(hero).unwrap();
    store
        .add_component(component("body", ComponentType::Text))
        .unwrap();
    let before = store.components().to_vec();

    let settings = ComponentSettings::Hero(HeroSettings {
        headline: "Business cards, fast".to_string(),
        ..Default::default()
    });
    store
        .update_component(id("hero"), ComponentPatch::settings(settings.clone()))
        .unwrap();

    let after = store.components();
    assert_eq!(after[0].settings, settings);
    assert_eq!(after[0].id, before[0].id);
    assert_eq!(after[0].name, before[0].name);
    assert_eq!(after[0].styles, before[0].styles);
    assert_eq!(after[0].is_hidden, before[0].is_hidden);
    assert_eq!(after[0].responsive, before[0].responsive);
    assert_eq!(after[1], before[1]);
}

#[test]
fn test_session_setters_never_touch_history() {
    let mut store = seeded_store(&["a", "b"]);
    store
        .add_component(component("c", ComponentType::Text))
        .unwrap();
    store.undo();

    let components = store.components().to_vec();
    let shape = history_shape(&store);

    store.set_selected_component(Some(id("a")));
    store.set_selected_component(Some(id("does-not-exist")));
    store.set_mode(EditorMode::Preview);
    store.set_mode(EditorMode::Code);
    store.set_zoom(2.5).unwrap();
    store.set_is_dragging(true);
    store.set_is_dragging(false);
    store.set_selected_component(None);

    assert_eq!(store.components(), components.as_slice());
    assert_eq!(history_shape(&store), shape);
}

#[test]
fn test_generated_ids_drive_a_session() {
    let mut ids_gen = IdGenerator::new("home");
    let mut store = EditorStore::new();

    let hero = Component::new(ids_gen.new_id(), ComponentType::Hero);
    let grid = Component::new(ids_gen.new_id(), ComponentType::ProductGrid);
    let hero_id = hero.id.clone();

    store.add_component(hero).unwrap();
    store.add_component(grid).unwrap();
    store.move_component(1, 0).unwrap();

    assert_eq!(store.index_of(&hero_id), Some(1));
    assert_eq!(store.undo_description(), Some("Move Product grid"));
}
