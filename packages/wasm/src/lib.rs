use pressroom_editor::{ComponentId, EditorConfig, EditorMode, EditorStore, Mutation, PageLayout};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

/// One page editor, owned by one editor view in the browser.
///
/// Everything crosses the boundary as JSON strings.
#[wasm_bindgen]
pub struct EditorHandle {
    store: EditorStore,
}

impl EditorHandle {
    fn try_new(config_json: Option<&str>) -> Result<Self, String> {
        let config = match config_json {
            Some(json) => {
                EditorConfig::from_json(json).map_err(|e| format!("Config error: {}", e))?
            }
            None => EditorConfig::default(),
        };

        let store = EditorStore::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self { store })
    }

    fn try_apply(&mut self, mutation_json: &str) -> Result<bool, String> {
        let mutation: Mutation = serde_json::from_str(mutation_json)
            .map_err(|e| format!("Invalid mutation: {}", e))?;

        self.store.apply(mutation).map_err(|e| e.to_string())
    }

    fn try_load_layout(&mut self, layout_json: &str) -> Result<(), String> {
        let layout: PageLayout =
            serde_json::from_str(layout_json).map_err(|e| format!("Invalid layout: {}", e))?;

        self.store.load(layout).map_err(|e| e.to_string())
    }

    fn try_layout_json(&self, page_id: Option<&str>) -> Result<String, String> {
        let layout = self.store.layout(page_id).map_err(|e| e.to_string())?;
        to_json(&layout)
    }

    fn try_set_mode(&mut self, mode: &str) -> Result<(), String> {
        let mode: EditorMode = mode.parse()?;
        self.store.set_mode(mode);
        Ok(())
    }

    fn try_set_selected(&mut self, id: Option<&str>) -> Result<(), String> {
        let id = id
            .map(ComponentId::new)
            .transpose()
            .map_err(|e| e.to_string())?;
        self.store.set_selected_component(id);
        Ok(())
    }
}

#[wasm_bindgen]
impl EditorHandle {
    /// Create an editor, optionally from an editor config JSON object
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<EditorHandle, JsValue> {
        Self::try_new(config_json.as_deref()).map_err(to_js)
    }

    /// Current component list as JSON
    pub fn components(&self) -> Result<String, JsValue> {
        to_json(self.store.components()).map_err(to_js)
    }

    /// Apply a JSON mutation; resolves to whether the list changed
    pub fn apply(&mut self, mutation_json: &str) -> Result<bool, JsValue> {
        self.try_apply(mutation_json).map_err(to_js)
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    #[wasm_bindgen(js_name = undoDescription)]
    pub fn undo_description(&self) -> Option<String> {
        self.store.undo_description().map(str::to_string)
    }

    #[wasm_bindgen(js_name = redoDescription)]
    pub fn redo_description(&self) -> Option<String> {
        self.store.redo_description().map(str::to_string)
    }

    #[wasm_bindgen(js_name = beginBatch)]
    pub fn begin_batch(&mut self, description: Option<String>) {
        self.store.begin_batch(description);
    }

    #[wasm_bindgen(js_name = endBatch)]
    pub fn end_batch(&mut self) -> bool {
        self.store.end_batch()
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.try_set_mode(mode).map_err(to_js)
    }

    pub fn mode(&self) -> String {
        self.store.mode().to_string()
    }

    /// Set zoom; returns the clamped value actually applied
    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f64) -> Result<f64, JsValue> {
        self.store
            .set_zoom(zoom)
            .map_err(|e| to_js(e.to_string()))
    }

    pub fn zoom(&self) -> f64 {
        self.store.zoom()
    }

    #[wasm_bindgen(js_name = setSelected)]
    pub fn set_selected(&mut self, id: Option<String>) -> Result<(), JsValue> {
        self.try_set_selected(id.as_deref()).map_err(to_js)
    }

    /// Selected component as JSON, or `undefined` if nothing (live) is selected
    #[wasm_bindgen(js_name = selectedComponent)]
    pub fn selected_component(&self) -> Result<Option<String>, JsValue> {
        self.store
            .selected_component()
            .map(|component| to_json(component).map_err(to_js))
            .transpose()
    }

    #[wasm_bindgen(js_name = setDragging)]
    pub fn set_dragging(&mut self, is_dragging: bool) {
        self.store.set_is_dragging(is_dragging);
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.store.is_dragging()
    }

    /// Replace the page with a stored layout (resets history)
    #[wasm_bindgen(js_name = loadLayout)]
    pub fn load_layout(&mut self, layout_json: &str) -> Result<(), JsValue> {
        self.try_load_layout(layout_json).map_err(to_js)
    }

    /// Current page as layout JSON for the save action
    #[wasm_bindgen(js_name = layoutJson)]
    pub fn layout_json(&self, page_id: Option<String>) -> Result<String, JsValue> {
        self.try_layout_json(page_id.as_deref()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.store.mark_saved();
    }
}
