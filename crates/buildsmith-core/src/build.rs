//! # Optimizer Wire Types
//!
//! The request the client sends and the build the optimizer returns.
//!
//! `BuildResult` is opaque data produced by the optimizer. It is validated
//! only as far as rendering needs: required fields must be present with the
//! right shape, slot counts default to 0, and unknown fields are ignored.

use crate::{BuildsmithError, SelectionState};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

// =============================================================================
// REQUEST
// =============================================================================

/// Body of `POST /api/optimize`: the selection, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub skills: BTreeMap<String, u32>,
}

impl OptimizationRequest {
    /// Build the request payload for a selection.
    ///
    /// Fails with `NoSkillsSelected` when the selection is empty, so no
    /// request is ever issued for it.
    pub fn from_selection(selection: &SelectionState) -> Result<Self, BuildsmithError> {
        if selection.is_empty() {
            return Err(BuildsmithError::NoSkillsSelected);
        }
        Ok(Self {
            skills: selection.list().clone(),
        })
    }
}

// =============================================================================
// ARMOR
// =============================================================================

/// A skill granted by an armor piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSkill {
    pub name: String,
    pub level: i64,
}

/// Decoration slot counts of one armor piece, by slot level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slots {
    #[serde(default)]
    pub level_1: u32,
    #[serde(default)]
    pub level_2: u32,
    #[serde(default)]
    pub level_3: u32,
    #[serde(default)]
    pub level_4: u32,
}

impl Slots {
    /// Count for a slot level in `1..=4`. Any other level has no slots.
    #[must_use]
    pub const fn count(&self, level: u8) -> u32 {
        match level {
            1 => self.level_1,
            2 => self.level_2,
            3 => self.level_3,
            4 => self.level_4,
            _ => 0,
        }
    }
}

/// One equipped armor piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    /// Equipment slot, e.g. `Head` or `Legs`.
    #[serde(rename = "type")]
    pub kind: String,
    pub piece_name: String,
    pub set_name: String,
    #[serde(default)]
    pub skills: Vec<ArmorSkill>,
    #[serde(default)]
    pub slots: Slots,
}

// =============================================================================
// TALISMAN
// =============================================================================

/// A skill granted by a talisman.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalismanSkill {
    pub name: String,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talisman {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<TalismanSkill>,
}

// =============================================================================
// DECORATIONS
// =============================================================================

/// Decoration descriptor as reported inside a usage entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub name: String,
    pub slot_level: u8,
}

/// How many of one decoration the build slots in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationUsage {
    pub count: u32,
    pub deco: Decoration,
}

// =============================================================================
// BUILD RESULT
// =============================================================================

/// The optimizer's proposed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Total defense, shown exactly as received.
    pub defense: Number,
    /// Equipped pieces, in the optimizer's order.
    pub armor: Vec<ArmorPiece>,
    #[serde(default)]
    pub talisman: Option<Talisman>,
    #[serde(default)]
    pub decorations: Vec<DecorationUsage>,
    /// Achieved level per skill.
    pub skills: BTreeMap<String, i64>,
    /// The requested targets, echoed back by the optimizer.
    #[serde(default)]
    pub target_skills: BTreeMap<String, i64>,
    /// Unused slot capacity, weighted by slot level.
    pub remaining_weighted_slots: Number,
    /// Aggregate slot counts across all pieces, keyed `level_N`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<BTreeMap<String, u32>>,
    /// Raw solver objective score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective_value: Option<Number>,
}

// =============================================================================
// TESTS
// =============================================================================
