//! # Core Type Definitions
//!
//! This module contains the catalog-side types shared by every component:
//! - Skill definitions as served by the optimizer (`SkillDef`)
//! - Selectable catalog entries (`CatalogEntry`)
//! - Error types (`BuildsmithError`)

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// SKILL DEFINITION
// =============================================================================

/// A known skill and the highest level it can reach.
///
/// Loaded once from the catalog endpoint and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDef {
    /// Display name, also the key used in selections.
    pub name: String,
    /// Maximum attainable level. A value of 0 yields no catalog entries.
    pub max_level: u32,
}

impl SkillDef {
    /// Create a new skill definition.
    #[must_use]
    pub fn new(name: impl Into<String>, max_level: u32) -> Self {
        Self {
            name: name.into(),
            max_level,
        }
    }
}

// =============================================================================
// CATALOG ENTRY
// =============================================================================

/// One selectable `(skill, level)` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Skill name.
    pub name: String,
    /// The specific level this entry selects, in `1..=max_level`.
    pub level: u32,
    /// Maximum level of the skill this entry belongs to.
    pub max_level: u32,
}

impl CatalogEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32, max_level: u32) -> Self {
        Self {
            name: name.into(),
            level,
            max_level,
        }
    }

    /// The rendered label used for display and search, e.g. `"Attack Boost 3"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.level)
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.level)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced to the user.
///
/// Every variant is terminal for the action that triggered it only;
/// the session stays usable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildsmithError {
    /// The skill catalog could not be fetched or parsed.
    #[error("Failed to load skill catalog: {0}")]
    CatalogLoad(String),

    /// A submission was attempted with an empty selection.
    #[error("No skills selected")]
    NoSkillsSelected,

    /// The optimizer rejected the request. The message is shown verbatim.
    #[error("{0}")]
    OptimizationFailed(String),

    /// The request never completed, or its response could not be parsed.
    #[error("Network error: {0}")]
    Transport(String),

    /// A requested skill or level is not in the catalog.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Client configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
