//! # buildsmith-core
//!
//! The deterministic client model for Buildsmith - THE LOGIC.
//!
//! This crate holds everything the client decides on its own, without
//! talking to the optimizer:
//! - expanding the skill list into selectable `(skill, level)` entries
//! - filtering those entries against free-text search input
//! - the selection state and its "highest requested level wins" merge
//! - the optimizer wire types (`OptimizationRequest`, `BuildResult`)
//! - rendering a `BuildResult` into a fixed-order report
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO network dependencies (pure Rust)
//! - BTreeMap only: every map iterates in name order
//! - Never mutates the build it renders

// =============================================================================
// MODULES
// =============================================================================

pub mod build;
pub mod catalog;
pub mod primitives;
pub mod render;
pub mod selection;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{BuildsmithError, CatalogEntry, SkillDef};

// =============================================================================
// RE-EXPORTS: Catalog + Selection
// =============================================================================

pub use catalog::{Catalog, filter};
pub use selection::SelectionState;

// =============================================================================
// RE-EXPORTS: Wire Types + Rendering
// =============================================================================

pub use build::{
    ArmorPiece, ArmorSkill, BuildResult, Decoration, DecorationUsage, OptimizationRequest, Slots,
    Talisman, TalismanSkill,
};
pub use render::{
    ArmorLine, BuildReport, ResultingSkill, SkillStatus, TalismanLine, format_slots, render,
};
