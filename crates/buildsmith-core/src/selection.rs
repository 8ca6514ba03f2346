//! # Selection Module
//!
//! The user's desired skills, keyed by skill name.
//!
//! At most one level is stored per skill: the highest level requested since
//! the skill was last removed. Selecting a lower level never downgrades;
//! lowering a skill means removing it first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of skill name to the highest requested level.
///
/// Volatile, session-local state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    skills: BTreeMap<String, u32>,
}

impl SelectionState {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `level` for `name`, keeping the higher of old and new.
    ///
    /// Returns `true` if the stored level changed.
    pub fn add_skill(&mut self, name: &str, level: u32) -> bool {
        match self.skills.get_mut(name) {
            Some(stored) if *stored >= level => false,
            Some(stored) => {
                *stored = level;
                true
            }
            None => {
                self.skills.insert(name.to_string(), level);
                true
            }
        }
    }

    /// Drop `name` from the selection. Returns `true` if it was present.
    pub fn remove_skill(&mut self, name: &str) -> bool {
        self.skills.remove(name).is_some()
    }

    /// The current mapping, in name order.
    #[must_use]
    pub fn list(&self) -> &BTreeMap<String, u32> {
        &self.skills
    }

    /// Stored level for `name`, if selected.
    #[must_use]
    pub fn level(&self, name: &str) -> Option<u32> {
        self.skills.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
