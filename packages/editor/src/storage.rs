//! # Layout Storage
//!
//! Interface to the collaborator that persists page layouts.
//!
//! The editor never saves on its own; the surrounding application reads the
//! current list from the store and hands it to a [`LayoutStorage`]:
//!
//! ```text
//! LayoutStorage::load → EditorStore::load → edit → EditorStore::layout → LayoutStorage::save
//! ```
//!
//! Two backends ship with the crate:
//! - **Memory**: in-process map, for tests and the browser playground
//! - **File**: one `<pageId>.json` per page under a directory, for tooling

use crate::component::Component;
use pressroom_common::ComponentId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),

    #[error("Duplicate component id {id} in page {page_id}")]
    DuplicateId { page_id: String, id: ComponentId },
}

/// Persisted form of one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub page_id: String,

    /// Bumped by the storage backend on every save
    #[serde(default)]
    pub version: u64,

    #[serde(default)]
    pub components: Vec<Component>,
}

impl PageLayout {
    pub fn new(page_id: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            page_id: page_id.into(),
            version: 0,
            components,
        }
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<&ComponentId> {
        let mut seen = HashSet::new();
        self.components
            .iter()
            .map(|c| &c.id)
            .find(|id| !seen.insert(*id))
    }

    fn check_unique_ids(&self) -> Result<(), StorageError> {
        match self.duplicate_id() {
            Some(id) => Err(StorageError::DuplicateId {
                page_id: self.page_id.clone(),
                id: id.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Persistence backend for page layouts
pub trait LayoutStorage {
    /// Fetch a page layout
    fn load(&self, page_id: &str) -> Result<PageLayout, StorageError>;

    /// Persist a layout, returning the stored version
    fn save(&mut self, layout: &PageLayout) -> Result<u64, StorageError>;

    /// Ids of all stored pages, sorted
    fn list(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory storage (for testing, temp pages)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pages: BTreeMap<String, PageLayout>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStorage for MemoryStorage {
    fn load(&self, page_id: &str) -> Result<PageLayout, StorageError> {
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| StorageError::PageNotFound(page_id.to_string()))
    }

    fn save(&mut self, layout: &PageLayout) -> Result<u64, StorageError> {
        layout.check_unique_ids()?;

        let version = self
            .pages
            .get(&layout.page_id)
            .map(|stored| stored.version + 1)
            .unwrap_or(1);

        let mut stored = layout.clone();
        stored.version = version;
        self.pages.insert(layout.page_id.clone(), stored);

        Ok(version)
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.pages.keys().cloned().collect())
    }
}

/// File-backed storage: `<root>/<pageId>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_path(&self, page_id: &str) -> Result<PathBuf, StorageError> {
        let valid = !page_id.is_empty()
            && page_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidPageId(page_id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", page_id)))
    }
}

impl LayoutStorage for FileStorage {
    fn load(&self, page_id: &str) -> Result<PageLayout, StorageError> {
        let path = self.page_path(page_id)?;
        if !path.exists() {
            return Err(StorageError::PageNotFound(page_id.to_string()));
        }

        let content = std::fs::read_to_string(&path)?;
        let layout: PageLayout = serde_json::from_str(&content)?;
        debug!(
            page_id,
            path = %path.display(),
            components = layout.components.len(),
            "Loaded page layout"
        );

        Ok(layout)
    }

    fn save(&mut self, layout: &PageLayout) -> Result<u64, StorageError> {
        layout.check_unique_ids()?;
        let path = self.page_path(&layout.page_id)?;

        let version = match self.load(&layout.page_id) {
            Ok(stored) => stored.version + 1,
            Err(StorageError::PageNotFound(_)) => 1,
            Err(e) => return Err(e),
        };

        let mut stored = layout.clone();
        stored.version = version;

        std::fs::create_dir_all(&self.root)?;
        std::fs::write(&path, serde_json::to_string_pretty(&stored)?)?;
        info!(page_id = %layout.page_id, version, path = %path.display(), "Saved page layout");

        Ok(version)
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    pages.push(stem.to_string());
                }
            }
        }
        pages.sort();

        Ok(pages)
    }
}
