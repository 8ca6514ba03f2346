//! # Build Report Renderer
//!
//! Turns a `BuildResult` into a deterministic, human-readable report.
//!
//! ## Section Order (fixed)
//!
//! 1. Total defense
//! 2. Armor pieces (type, name, set, slot counts, granted skills)
//! 3. Talisman
//! 4. Decorations used
//! 5. Resulting skills vs targets
//! 6. Remaining weighted slot value
//!
//! Rendering borrows the build and never mutates it. Missing slot counts
//! render as 0, empty lists render as `None`, and skills with an achieved
//! level of 0 or less are skipped.

use crate::build::{ArmorPiece, BuildResult, DecorationUsage, Slots, Talisman};
use crate::primitives::{BELOW_LABEL, MET_LABEL, NONE_LABEL, SLOT_LEVELS};
use std::fmt;

// =============================================================================
// REPORT TYPES
// =============================================================================

/// One armor piece, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorLine {
    pub kind: String,
    pub piece_name: String,
    pub set_name: String,
    /// `L1:<n> L2:<n> L3:<n> L4:<n>`
    pub slots: String,
    /// `"<name> +<level>"` joined by `", "`, or `None`.
    pub skills: String,
}

/// The equipped talisman, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalismanLine {
    pub name: String,
    /// `"<name> +<points>"` joined by `", "`, or `None`.
    pub skills: String,
}

/// Whether an achieved skill level reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillStatus {
    Met,
    Below,
}

impl SkillStatus {
    /// Compare an achieved level against its target.
    #[must_use]
    pub const fn assess(achieved: i64, target: i64) -> Self {
        if achieved >= target {
            Self::Met
        } else {
            Self::Below
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Met => MET_LABEL,
            Self::Below => BELOW_LABEL,
        }
    }
}

/// One entry of the resulting-skills section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultingSkill {
    pub name: String,
    pub achieved: i64,
    /// Target level, 0 when the skill was not requested.
    pub target: i64,
}

impl ResultingSkill {
    /// Status annotation, present only for requested skills.
    #[must_use]
    pub const fn status(&self) -> Option<SkillStatus> {
        if self.target > 0 {
            Some(SkillStatus::assess(self.achieved, self.target))
        } else {
            None
        }
    }
}

impl fmt::Display for ResultingSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.achieved)?;
        if let Some(status) = self.status() {
            write!(f, " (Target: {} - {})", self.target, status.label())?;
        }
        Ok(())
    }
}

/// A rendered build, sections in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub defense: String,
    pub armor: Vec<ArmorLine>,
    pub talisman: Option<TalismanLine>,
    /// `"<count>x <name> (L<slot_level>)"` per usage.
    pub decorations: Vec<String>,
    pub skills: Vec<ResultingSkill>,
    pub remaining_weighted_slots: String,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a build into its report.
#[must_use]
pub fn render(build: &BuildResult) -> BuildReport {
    BuildReport {
        defense: build.defense.to_string(),
        armor: build.armor.iter().map(armor_line).collect(),
        talisman: build.talisman.as_ref().map(talisman_line),
        decorations: build.decorations.iter().map(decoration_line).collect(),
        skills: resulting_skills(build),
        remaining_weighted_slots: build.remaining_weighted_slots.to_string(),
    }
}

/// `L1:<n> L2:<n> L3:<n> L4:<n>`
#[must_use]
pub fn format_slots(slots: &Slots) -> String {
    SLOT_LEVELS
        .iter()
        .map(|&level| format!("L{}:{}", level, slots.count(level)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_or_none(parts: Vec<String>) -> String {
    if parts.is_empty() {
        NONE_LABEL.to_string()
    } else {
        parts.join(", ")
    }
}

fn armor_line(piece: &ArmorPiece) -> ArmorLine {
    let skills = piece
        .skills
        .iter()
        .map(|s| format!("{} +{}", s.name, s.level))
        .collect();
    ArmorLine {
        kind: piece.kind.clone(),
        piece_name: piece.piece_name.clone(),
        set_name: piece.set_name.clone(),
        slots: format_slots(&piece.slots),
        skills: join_or_none(skills),
    }
}

fn talisman_line(talisman: &Talisman) -> TalismanLine {
    let skills = talisman
        .skills
        .iter()
        .map(|s| format!("{} +{}", s.name, s.points))
        .collect();
    TalismanLine {
        name: talisman.name.clone(),
        skills: join_or_none(skills),
    }
}

fn decoration_line(usage: &DecorationUsage) -> String {
    format!(
        "{}x {} (L{})",
        usage.count, usage.deco.name, usage.deco.slot_level
    )
}

fn resulting_skills(build: &BuildResult) -> Vec<ResultingSkill> {
    // BTreeMap iteration is already lexicographic by name.
    build
        .skills
        .iter()
        .filter(|&(_, &achieved)| achieved > 0)
        .map(|(name, &achieved)| ResultingSkill {
            name: name.clone(),
            achieved,
            target: build.target_skills.get(name).copied().unwrap_or(0),
        })
        .collect()
}

// =============================================================================
// TEXT OUTPUT
// =============================================================================

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Defense: {}", self.defense)?;

        writeln!(f)?;
        writeln!(f, "Armor Pieces:")?;
        for piece in &self.armor {
            writeln!(
                f,
                "- {} : {} (Set: {})",
                piece.kind, piece.piece_name, piece.set_name
            )?;
            writeln!(f, "  Slots: {}", piece.slots)?;
            writeln!(f, "  Skills: {}", piece.skills)?;
        }

        writeln!(f)?;
        writeln!(f, "Talisman:")?;
        match &self.talisman {
            Some(talisman) => {
                writeln!(f, "- {}", talisman.name)?;
                writeln!(f, "  Skills: {}", talisman.skills)?;
            }
            None => writeln!(f, "- {}", NONE_LABEL)?,
        }

        writeln!(f)?;
        writeln!(f, "Decorations Used:")?;
        if self.decorations.is_empty() {
            writeln!(f, "- {}", NONE_LABEL)?;
        }
        for deco in &self.decorations {
            writeln!(f, "- {}", deco)?;
        }

        writeln!(f)?;
        writeln!(f, "Resulting Skills:")?;
        for skill in &self.skills {
            writeln!(f, "- {}", skill)?;
        }

        writeln!(f)?;
        write!(
            f,
            "Total Weighted Slot Value Remaining: {}",
            self.remaining_weighted_slots
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
