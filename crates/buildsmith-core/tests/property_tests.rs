//! # Property-Based Tests
//!
//! Selection merge and catalog filter invariants, checked with proptest.

use buildsmith_core::{Catalog, CatalogEntry, SelectionState, SkillDef, filter};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn skill_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Agitator",
        "Attack Boost",
        "Botanist",
        "Free Meal",
        "Geologist",
    ])
    .prop_map(str::to_string)
}

fn skill_defs() -> impl Strategy<Value = Vec<SkillDef>> {
    vec(
        ("[A-Za-z ]{1,12}", 0u32..8).prop_map(|(name, max)| SkillDef::new(name, max)),
        0..12,
    )
}

// =============================================================================
// SELECTION PROPERTIES
// =============================================================================

proptest! {
    /// The stored level is the maximum ever requested for that name.
    #[test]
    fn stored_level_is_running_maximum(levels in vec(1u32..10, 1..30)) {
        let mut selection = SelectionState::new();
        for &level in &levels {
            selection.add_skill("Agitator", level);
        }
        prop_assert_eq!(selection.level("Agitator"), levels.iter().copied().max());
        prop_assert_eq!(selection.len(), 1);
    }

    /// Removal resets history: the next add stores exactly its level.
    #[test]
    fn remove_then_add_stores_exact_level(
        history in vec(1u32..10, 0..20),
        level in 1u32..10,
    ) {
        let mut selection = SelectionState::new();
        for &prior in &history {
            selection.add_skill("Botanist", prior);
        }
        selection.remove_skill("Botanist");
        selection.add_skill("Botanist", level);
        prop_assert_eq!(selection.level("Botanist"), Some(level));
    }

    /// Interleaved operations across names keep one entry per name, each the
    /// maximum since that name's last removal.
    #[test]
    fn interleaved_operations_track_per_name_maximum(
        ops in vec((skill_name(), prop::option::of(1u32..10)), 0..60)
    ) {
        let mut selection = SelectionState::new();
        let mut expected = std::collections::BTreeMap::new();

        for (name, op) in &ops {
            match op {
                Some(level) => {
                    selection.add_skill(name, *level);
                    let slot = expected.entry(name.clone()).or_insert(*level);
                    *slot = (*slot).max(*level);
                }
                None => {
                    selection.remove_skill(name);
                    expected.remove(name);
                }
            }
        }

        prop_assert_eq!(selection.list(), &expected);
    }
}

// =============================================================================
// CATALOG PROPERTIES
// =============================================================================

proptest! {
    /// Expansion yields exactly `max_level` ascending entries per skill.
    #[test]
    fn expansion_count_matches_levels(defs in skill_defs()) {
        let catalog = Catalog::from_defs(&defs);
        let expected: u32 = defs.iter().map(|d| d.max_level).sum();
        prop_assert_eq!(catalog.len(), expected as usize);

        let mut entries = catalog.entries().iter();
        for def in &defs {
            for level in 1..=def.max_level {
                let entry = entries.next().expect("entry");
                prop_assert_eq!(&entry.name, &def.name);
                prop_assert_eq!(entry.level, level);
            }
        }
    }

    /// Empty filter text is the identity.
    #[test]
    fn empty_filter_is_identity(defs in skill_defs()) {
        let catalog = Catalog::from_defs(&defs);
        prop_assert_eq!(filter(catalog.entries(), ""), catalog.entries().to_vec());
    }

    /// Filter output is an order-preserving subsequence of its input, and
    /// every kept entry matches case-insensitively.
    #[test]
    fn filter_is_stable_subsequence(defs in skill_defs(), text in "[a-zA-Z0-9 ]{0,4}") {
        let catalog = Catalog::from_defs(&defs);
        let hits = filter(catalog.entries(), &text);
        let needle = text.to_lowercase();

        let mut remaining = catalog.entries().iter();
        for hit in &hits {
            prop_assert!(hit.label().to_lowercase().contains(&needle));
            prop_assert!(remaining.any(|e: &CatalogEntry| e == hit));
        }
    }
}
