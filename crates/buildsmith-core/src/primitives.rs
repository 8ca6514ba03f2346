//! # Primitives
//!
//! Fixed labels and limits shared by the renderer and the client surface.

/// Slot levels reported for every armor piece, in display order.
pub const SLOT_LEVELS: [u8; 4] = [1, 2, 3, 4];

/// Placeholder shown for an empty section or skill list.
pub const NONE_LABEL: &str = "None";

/// Indicator shown when a search matches no catalog entry.
///
/// Distinct from an empty list so "still loading" and "no matches" can be told apart.
pub const NO_SKILLS_FOUND: &str = "No skills found";

/// Indicator shown when searching before the catalog has loaded, or after it failed to.
pub const CATALOG_UNAVAILABLE: &str = "Skill catalog not loaded";

/// Status label for a skill that reached its target.
pub const MET_LABEL: &str = "MET";

/// Status label for a skill short of its target.
pub const BELOW_LABEL: &str = "BELOW";
