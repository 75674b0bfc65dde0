//! # Layout Mutations
//!
//! Structural operations on a page's component list.
//!
//! ## Design Principles
//!
//! 1. **Validated**: every mutation is checked against the list before it
//!    touches anything, so a rejected mutation leaves the list as it was
//! 2. **Minimal**: add, update, remove, move; everything else is built on these
//! 3. **Serializable**: browser bindings and scripts send mutations as JSON
//!
//! ## Mutation Semantics
//!
//! ### AddComponent
//! - Appends to the end of the list
//! - Fails if the id is already present
//!
//! ### UpdateComponent
//! - Shallow merge of a [`ComponentPatch`] into the matching entry
//! - Order and every other entry are untouched
//!
//! ### RemoveComponent
//! - Removes the matching entry; the rest keep their relative order
//!
//! ### MoveComponent
//! - Splice-and-reinsert: the entry at `from` is removed first, then
//!   reinserted at `to` in the shortened list
//! - Both indices must be `< len`

use crate::component::{Component, ComponentPatch};
use pressroom_common::ComponentId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Mutation {
    /// Append a component to the end of the page
    AddComponent { component: Component },

    /// Merge a partial update into one component
    UpdateComponent {
        id: ComponentId,
        patch: ComponentPatch,
    },

    /// Remove a component from the page
    RemoveComponent { id: ComponentId },

    /// Reorder: take the component at `from` and reinsert it at `to`
    MoveComponent { from: usize, to: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Component not found: {0}")]
    ComponentNotFound(ComponentId),

    #[error("Duplicate component id: {0}")]
    DuplicateId(ComponentId),

    #[error("Index {index} out of bounds for {len} components")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl Mutation {
    /// Apply mutation to the component list with validation
    pub fn apply(&self, components: &mut Vec<Component>) -> Result<(), MutationError> {
        self.validate(components)?;

        match self {
            Mutation::AddComponent { component } => {
                components.push(component.clone());
            }

            Mutation::UpdateComponent { id, patch } => {
                let index = position(components, id)?;
                components[index].apply_patch(patch);
            }

            Mutation::RemoveComponent { id } => {
                let index = position(components, id)?;
                components.remove(index);
            }

            Mutation::MoveComponent { from, to } => {
                let moved = components.remove(*from);
                components.insert(*to, moved);
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, components: &[Component]) -> Result<(), MutationError> {
        match self {
            Mutation::AddComponent { component } => {
                if components.iter().any(|c| c.id == component.id) {
                    return Err(MutationError::DuplicateId(component.id.clone()));
                }
                Ok(())
            }

            Mutation::UpdateComponent { id, .. } | Mutation::RemoveComponent { id } => {
                position(components, id).map(|_| ())
            }

            Mutation::MoveComponent { from, to } => {
                let len = components.len();
                for index in [*from, *to] {
                    if index >= len {
                        return Err(MutationError::IndexOutOfBounds { index, len });
                    }
                }
                Ok(())
            }
        }
    }

    /// Human-readable label used for undo/redo descriptions
    pub fn label(&self, components: &[Component]) -> String {
        let name_of = |id: &ComponentId| {
            components
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        match self {
            Mutation::AddComponent { component } => format!("Add {}", component.name),
            Mutation::UpdateComponent { id, .. } => format!("Edit {}", name_of(id)),
            Mutation::RemoveComponent { id } => format!("Remove {}", name_of(id)),
            Mutation::MoveComponent { from, .. } => match components.get(*from) {
                Some(component) => format!("Move {}", component.name),
                None => "Move component".to_string(),
            },
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "add-component",
            Mutation::UpdateComponent { .. } => "update-component",
            Mutation::RemoveComponent { .. } => "remove-component",
            Mutation::MoveComponent { .. } => "move-component",
        }
    }
}

fn position(components: &[Component], id: &ComponentId) -> Result<usize, MutationError> {
    components
        .iter()
        .position(|c| &c.id == id)
        .ok_or_else(|| MutationError::ComponentNotFound(id.clone()))
}
