//! # Undo/Redo History
//!
//! Linear history over full snapshots of the component list.
//!
//! ## Design
//!
//! - `present` is the list being rendered; `past` holds earlier snapshots
//!   (oldest first) and `future` holds undone ones (most recently undone first)
//! - A committed change pushes the old `present` onto `past` and clears `future`
//! - Undo/redo only shift snapshots between the three segments
//! - Snapshots are shared `Arc`s, so pushing one never copies the list
//! - Supports batches (several changes committed as one undo step)
//! - `past` is bounded by `max_levels`; the oldest snapshot is dropped first
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//!
//! history.apply(&Mutation::AddComponent { component })?;
//! assert!(history.can_undo());
//!
//! history.undo();
//! history.redo();
//! ```

use crate::component::Component;
use crate::mutations::{Mutation, MutationError};
use std::collections::VecDeque;
use std::sync::Arc;

/// Immutable copy of the full ordered component list
pub type Snapshot = Arc<Vec<Component>>;

/// One undoable step: the snapshot on one side of the step, plus its label
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    pub label: Option<String>,
}

#[derive(Debug)]
struct OpenBatch {
    /// `present` when the batch started
    base: Snapshot,
    description: Option<String>,
    /// Label of the first change inside the batch, used when no description was set
    first_label: Option<String>,
}

/// Snapshot history for one page
#[derive(Debug)]
pub struct History {
    past: VecDeque<HistoryEntry>,
    present: Snapshot,
    future: VecDeque<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<OpenBatch>,
}

impl History {
    /// Create an empty history with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an empty history with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: Arc::new(Vec::new()),
            future: VecDeque::new(),
            max_levels,
            current_batch: None,
        }
    }

    pub fn present(&self) -> &[Component] {
        &self.present
    }

    /// Prior snapshots, oldest first
    pub fn past(&self) -> impl Iterator<Item = &[Component]> + '_ {
        self.past.iter().map(|entry| entry.snapshot.as_slice())
    }

    /// Undone snapshots, most recently undone first
    pub fn future(&self) -> impl Iterator<Item = &[Component]> + '_ {
        self.future.iter().map(|entry| entry.snapshot.as_slice())
    }

    /// Apply a mutation to a copy of `present` and commit the result.
    ///
    /// Returns `Ok(false)` when the mutation succeeded but left the list
    /// unchanged; nothing is recorded in that case. A rejected mutation
    /// leaves the history untouched.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<bool, MutationError> {
        mutation.validate(&self.present)?;

        let mut next = Vec::clone(&self.present);
        mutation.apply(&mut next)?;

        let label = mutation.label(&self.present);
        Ok(self.commit(next, Some(label)))
    }

    /// Install `next` as the new present, recording the old one for undo.
    /// Callers must have validated `next` against the current list.
    pub(crate) fn commit(&mut self, next: Vec<Component>, label: Option<String>) -> bool {
        if next == *self.present {
            return false;
        }

        if let Some(batch) = &mut self.current_batch {
            if batch.first_label.is_none() {
                batch.first_label = label;
            }
            self.present = Arc::new(next);
            self.future.clear();
            return true;
        }

        let previous = std::mem::replace(&mut self.present, Arc::new(next));
        self.push_past(HistoryEntry {
            snapshot: previous,
            label,
        });
        self.future.clear();
        true
    }

    /// Start a batch of changes (undone/redone together). Starting a batch
    /// while one is open keeps the outer batch.
    pub fn begin_batch(&mut self, description: Option<String>) {
        if self.current_batch.is_some() {
            return;
        }

        self.current_batch = Some(OpenBatch {
            base: Arc::clone(&self.present),
            description,
            first_label: None,
        });
    }

    /// End the current batch. Returns true if it was recorded as a step.
    pub fn end_batch(&mut self) -> bool {
        let Some(batch) = self.current_batch.take() else {
            return false;
        };

        if Arc::ptr_eq(&batch.base, &self.present) || *batch.base == *self.present {
            return false;
        }

        self.push_past(HistoryEntry {
            snapshot: batch.base,
            label: batch.description.or(batch.first_label),
        });
        self.future.clear();
        true
    }

    pub fn in_batch(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Undo the most recent step. An open batch is committed first.
    pub fn undo(&mut self) -> bool {
        self.end_batch();

        match self.past.pop_back() {
            Some(entry) => {
                let undone = std::mem::replace(&mut self.present, entry.snapshot);
                self.future.push_front(HistoryEntry {
                    snapshot: undone,
                    label: entry.label,
                });
                true
            }
            None => false, // Nothing to undo
        }
    }

    /// Redo the most recently undone step. An open batch is committed first.
    pub fn redo(&mut self) -> bool {
        self.end_batch();

        match self.future.pop_front() {
            Some(entry) => {
                let current = std::mem::replace(&mut self.present, entry.snapshot);
                self.past.push_back(HistoryEntry {
                    snapshot: current,
                    label: entry.label,
                });
                true
            }
            None => false, // Nothing to redo
        }
    }

    fn push_past(&mut self, entry: HistoryEntry) {
        self.past.push_back(entry);

        // Trim if exceeded max levels
        while self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.pop_front();
        }
    }

    /// Replace `present` and drop all history
    pub fn reset(&mut self, components: Vec<Component>) {
        self.present = Arc::new(components);
        self.clear();
    }

    /// Clear all undo/redo history, keeping `present`
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.current_batch = None;
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.past.back().and_then(|entry| entry.label.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.future.front().and_then(|entry| entry.label.as_deref())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentPatch, ComponentType};
    use pressroom_common::ComponentId;

    fn component(raw: &str) -> Component {
        Component::new(ComponentId::new(raw).unwrap(), ComponentType::Text)
    }

    fn add(raw: &str) -> Mutation {
        Mutation::AddComponent {
            component: component(raw),
        }
    }

    fn ids(list: &[Component]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert!(history.present().is_empty());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_apply_and_undo() {
        let mut history = History::new();

        assert!(history.apply(&add("a")).unwrap());
        assert_eq!(ids(history.present()), vec!["a"]);
        assert_eq!(history.undo_levels(), 1);

        assert!(history.undo());
        assert!(history.present().is_empty());
        assert_eq!(history.redo_levels(), 1);

        assert!(history.redo());
        assert_eq!(ids(history.present()), vec!["a"]);
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_undo_redo_on_empty_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.present().is_empty());
    }

    #[test]
    fn test_new_mutation_clears_redo() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();
        history.undo();
        assert_eq!(history.redo_levels(), 1);

        history.apply(&add("b")).unwrap();
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.redo());
    }

    #[test]
    fn test_rejected_mutation_records_nothing() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();
        history.undo();

        let result = history.apply(&Mutation::RemoveComponent {
            id: ComponentId::new("missing").unwrap(),
        });

        assert!(result.is_err());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 1);
    }

    #[test]
    fn test_unchanged_result_records_nothing() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();
        history.apply(&add("b")).unwrap();

        let moved = history
            .apply(&Mutation::MoveComponent { from: 1, to: 1 })
            .unwrap();
        assert!(!moved);

        let patched = history
            .apply(&Mutation::UpdateComponent {
                id: ComponentId::new("a").unwrap(),
                patch: ComponentPatch::name("Text"),
            })
            .unwrap();
        assert!(!patched);

        assert_eq!(history.undo_levels(), 2);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = History::with_max_levels(2);

        for raw in ["a", "b", "c"] {
            history.apply(&add(raw)).unwrap();
        }

        assert_eq!(history.undo_levels(), 2);
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        // Oldest step ([] -> [a]) was dropped
        assert_eq!(ids(history.present()), vec!["a"]);
    }

    #[test]
    fn test_batched_mutations() {
        let mut history = History::new();
        history.begin_batch(Some("Insert hero section".to_string()));

        history.apply(&add("a")).unwrap();
        history.apply(&add("b")).unwrap();
        history.apply(&Mutation::MoveComponent { from: 1, to: 0 }).unwrap();

        assert!(history.end_batch());
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.undo_description(), Some("Insert hero section"));

        history.undo();
        assert!(history.present().is_empty());
        assert_eq!(history.redo_description(), Some("Insert hero section"));

        history.redo();
        assert_eq!(ids(history.present()), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_batch_records_nothing() {
        let mut history = History::new();
        history.begin_batch(None);
        assert!(!history.end_batch());
        assert_eq!(history.undo_levels(), 0);
    }

    #[test]
    fn test_batch_without_description_uses_first_label() {
        let mut history = History::new();
        history.begin_batch(None);
        history.apply(&add("a")).unwrap();
        history.apply(&add("b")).unwrap();
        history.end_batch();

        assert_eq!(history.undo_description(), Some("Add Text"));
    }

    #[test]
    fn test_change_inside_batch_clears_redo() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();
        history.undo();
        assert!(history.can_redo());

        history.begin_batch(None);
        assert!(history.can_redo());

        history.apply(&add("b")).unwrap();
        assert!(!history.can_redo());
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.redo_description(), None);

        assert!(history.end_batch());
        assert!(!history.redo());
        assert_eq!(ids(history.present()), vec!["b"]);
    }

    #[test]
    fn test_undo_commits_open_batch() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();

        history.begin_batch(None);
        history.apply(&add("b")).unwrap();
        history.apply(&add("c")).unwrap();

        assert!(history.undo());
        assert!(!history.in_batch());
        assert_eq!(ids(history.present()), vec!["a"]);
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_reset_drops_history() {
        let mut history = History::new();
        history.apply(&add("a")).unwrap();
        history.reset(vec![component("x"), component("y")]);

        assert_eq!(ids(history.present()), vec!["x", "y"]);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
