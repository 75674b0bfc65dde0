//! # Pressroom Editor
//!
//! State core of the storefront page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ LayoutStorage: stored page → PageLayout     │
//! └─────────────────────────────────────────────┘
//!                     ↓ load
//! ┌─────────────────────────────────────────────┐
//! │ EditorStore: one per open editor view       │
//! │  - History: past / present / future         │
//! │  - Mutations: add, update, remove, move     │
//! │  - Session: mode, selection, zoom, drag     │
//! └─────────────────────────────────────────────┘
//!                     ↓ components()
//! ┌─────────────────────────────────────────────┐
//! │ canvas renderer / property toolbar          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Present is the source of truth**: the canvas renders exactly the
//!    current snapshot
//! 2. **Every structural change is undoable**: mutations route through the
//!    history; session state (mode, selection, zoom) never does
//! 3. **Strict validation**: an invalid mutation is an error and changes nothing
//! 4. **No ambient state**: each editor view owns its own store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pressroom_editor::{Component, ComponentPatch, ComponentType, EditorStore};
//!
//! let mut store = EditorStore::new();
//! store.add_component(Component::new(ids.new_id(), ComponentType::Hero))?;
//! store.update_component(hero_id, ComponentPatch::name("Spring sale"))?;
//!
//! store.undo();
//! store.redo();
//!
//! let layout = store.layout(Some("home"))?;
//! storage.save(&layout)?;
//! store.mark_saved();
//! ```

mod component;
mod config;
mod errors;
mod history;
mod mutations;
mod storage;
mod store;

pub use component::{
    Alignment, Breakpoint, CallToActionSettings, Component, ComponentPatch, ComponentSettings,
    ComponentType, FeatureItem, FeaturesSettings, HeroSettings, ProductGridSettings, Responsive,
    Styles, TextSettings,
};
pub use config::{ConfigError, EditorConfig};
pub use errors::EditorError;
pub use history::{History, HistoryEntry, Snapshot};
pub use mutations::{Mutation, MutationError};
pub use storage::{FileStorage, LayoutStorage, MemoryStorage, PageLayout, StorageError};
pub use store::{EditorMode, EditorStore};

// Re-export common types for convenience
pub use pressroom_common::{ComponentId, IdGenerator};
