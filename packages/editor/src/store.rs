//! # Editor Store
//!
//! The state of one open page editor: the component history plus session
//! metadata (mode, selection, zoom, drag flag).
//!
//! A store is created per editor view and passed to the canvas and toolbar;
//! there is no shared global instance. Only the four mutations (add, update,
//! remove, move) and undo/redo touch the component list. Session setters
//! never create undo steps.
//!
//! Invalid mutations (unknown id, out-of-range index, duplicate id) are
//! rejected with an error and leave both the list and the history as they
//! were. A mutation that leaves the list unchanged records no undo step.

use crate::component::{Component, ComponentPatch};
use crate::config::EditorConfig;
use crate::history::History;
use crate::mutations::Mutation;
use crate::storage::PageLayout;
use crate::EditorError;
use pressroom_common::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Which view the editor renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
    Code,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EditorMode::Edit => "edit",
            EditorMode::Preview => "preview",
            EditorMode::Code => "code",
        })
    }
}

impl FromStr for EditorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(EditorMode::Edit),
            "preview" => Ok(EditorMode::Preview),
            "code" => Ok(EditorMode::Code),
            other => Err(format!(
                "Invalid mode: {}. Use: edit, preview, or code",
                other
            )),
        }
    }
}

/// Editing state for one page
#[derive(Debug)]
pub struct EditorStore {
    config: EditorConfig,
    history: History,

    /// Page the current list was loaded from, if any
    page_id: Option<String>,

    selected_component: Option<ComponentId>,
    mode: EditorMode,
    is_dragging: bool,
    zoom: f64,

    /// Increments on every commit, undo and redo
    version: u64,

    /// Version last loaded or saved
    saved_version: u64,
}

impl EditorStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::from_valid_config(EditorConfig::default())
    }

    /// Create an empty store with the given settings, rejecting a config
    /// that fails `EditorConfig::validate`
    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EditorConfig) -> Self {
        Self {
            history: History::with_max_levels(config.history_limit),
            page_id: None,
            selected_component: None,
            mode: config.default_mode,
            is_dragging: false,
            zoom: config.default_zoom,
            version: 0,
            saved_version: 0,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ---- read access ----

    /// Current component list, in render order
    pub fn components(&self) -> &[Component] {
        self.history.present()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components().iter().find(|c| &c.id == id)
    }

    pub fn index_of(&self, id: &ComponentId) -> Option<usize> {
        self.components().iter().position(|c| &c.id == id)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Raw selection, which may name a component that no longer exists
    pub fn selected_component_id(&self) -> Option<&ComponentId> {
        self.selected_component.as_ref()
    }

    /// Selected component, resolved against the current list
    pub fn selected_component(&self) -> Option<&Component> {
        self.selected_component
            .as_ref()
            .and_then(|id| self.component(id))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True if the list changed since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.version != self.saved_version
    }

    // ---- session state (never historied) ----

    pub fn set_mode(&mut self, mode: EditorMode) {
        debug!(%mode, "Set editor mode");
        self.mode = mode;
    }

    /// Select a component by id. The id is not checked against the list.
    pub fn set_selected_component(&mut self, id: Option<ComponentId>) {
        self.selected_component = id;
    }

    /// Set canvas zoom, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f64) -> Result<f64, EditorError> {
        if !zoom.is_finite() {
            warn!(zoom, "Rejected non-finite zoom");
            return Err(EditorError::InvalidZoom(zoom));
        }

        self.zoom = self.config.clamp_zoom(zoom);
        Ok(self.zoom)
    }

    pub fn set_is_dragging(&mut self, is_dragging: bool) {
        self.is_dragging = is_dragging;
    }

    // ---- mutations ----

    /// Apply a mutation through the history.
    ///
    /// Returns `Ok(true)` if a change was committed, `Ok(false)` if the list
    /// was left unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<bool, EditorError> {
        match self.history.apply(&mutation) {
            Ok(changed) => {
                if changed {
                    self.version += 1;
                    debug!(
                        mutation = mutation.name(),
                        version = self.version,
                        components = self.components().len(),
                        "Applied mutation"
                    );
                } else {
                    debug!(mutation = mutation.name(), "Mutation left layout unchanged");
                }
                Ok(changed)
            }
            Err(e) => {
                warn!(mutation = mutation.name(), error = %e, "Rejected mutation");
                Err(e.into())
            }
        }
    }

    pub fn add_component(&mut self, component: Component) -> Result<bool, EditorError> {
        self.apply(Mutation::AddComponent { component })
    }

    pub fn update_component(
        &mut self,
        id: ComponentId,
        patch: ComponentPatch,
    ) -> Result<bool, EditorError> {
        self.apply(Mutation::UpdateComponent { id, patch })
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Result<bool, EditorError> {
        self.apply(Mutation::RemoveComponent { id })
    }

    pub fn move_component(&mut self, from: usize, to: usize) -> Result<bool, EditorError> {
        self.apply(Mutation::MoveComponent { from, to })
    }

    // ---- history ----

    /// Undo the most recent step. An open batch is committed first.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Redo the most recently undone step. An open batch is committed first.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.version += 1;
        }
        changed
    }

    /// Group the following mutations into a single undo step
    pub fn begin_batch(&mut self, description: Option<String>) {
        self.history.begin_batch(description);
    }

    /// Close the current batch. Returns true if it was recorded as a step.
    pub fn end_batch(&mut self) -> bool {
        self.history.end_batch()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ---- persistence boundary ----

    /// Replace the list with a stored layout. History and selection are reset.
    pub fn load(&mut self, layout: PageLayout) -> Result<(), EditorError> {
        if let Some(id) = layout.duplicate_id() {
            return Err(EditorError::InvalidLayout(format!(
                "duplicate component id {} in page {}",
                id, layout.page_id
            )));
        }

        info!(
            page_id = %layout.page_id,
            version = layout.version,
            components = layout.components.len(),
            "Loaded layout into editor"
        );

        self.history.reset(layout.components);
        self.page_id = Some(layout.page_id);
        self.selected_component = None;
        self.is_dragging = false;
        self.version += 1;
        self.saved_version = self.version;

        Ok(())
    }

    /// Current list as a layout for the given page (or the loaded page)
    pub fn layout(&self, page_id: Option<&str>) -> Result<PageLayout, EditorError> {
        let page_id = page_id
            .or(self.page_id.as_deref())
            .ok_or_else(|| EditorError::InvalidLayout("no page id".to_string()))?;

        Ok(PageLayout::new(page_id, self.components().to_vec()))
    }

    /// Record that the current list has been persisted
    pub fn mark_saved(&mut self) {
        self.saved_version = self.version;
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
