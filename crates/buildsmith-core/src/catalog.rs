//! # Catalog Module
//!
//! Expands skill definitions into selectable entries and filters them.
//!
//! The catalog is write-once: it is built from the skill list in one step and
//! exposes no mutators. Reloading means building a new `Catalog`.

use crate::{CatalogEntry, SkillDef};

/// Ordered, immutable list of selectable `(skill, level)` entries.
///
/// Entries follow the order skills were received, and within one skill
/// ascend from level 1 to its maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog (nothing loaded yet, or the load failed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand every definition into one entry per level in `1..=max_level`.
    #[must_use]
    pub fn from_defs(defs: &[SkillDef]) -> Self {
        let entries = defs
            .iter()
            .flat_map(|def| {
                (1..=def.max_level)
                    .map(move |level| CatalogEntry::new(def.name.clone(), level, def.max_level))
            })
            .collect();
        Self { entries }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose label contains `text`, case-insensitively.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<CatalogEntry> {
        filter(&self.entries, text)
    }

    /// Find the entry for an exact skill name and level.
    #[must_use]
    pub fn find(&self, name: &str, level: u32) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name && entry.level == level)
    }

    /// Maximum level of a skill, if the catalog knows it.
    #[must_use]
    pub fn max_level(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.max_level)
    }
}

/// Stable, case-insensitive substring filter over entry labels.
///
/// An empty `text` keeps every entry. Output order matches input order.
#[must_use]
pub fn filter(entries: &[CatalogEntry], text: &str) -> Vec<CatalogEntry> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
