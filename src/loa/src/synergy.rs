//! Synergy rulebook and team synergy evaluation
//!
//! A synergy is a named team-wide bonus that activates once enough members
//! carry its tag. Percentage synergies compound on a running subtotal and
//! are always resolved before flat synergies; every active synergy also
//! grants a tiered cohesion bonus that depends only on how many members
//! share it.

use serde::{Deserialize, Serialize};

/// Minimum number of members that must carry a synergy for it to activate
pub const ACTIVATION_THRESHOLD: usize = 3;

/// Flat cohesion value granted per active synergy at the 3-member tier
pub const COHESION_BASE: f64 = 25.0;

/// How a synergy's configured value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    /// Value is a percentage of the running subtotal, compounding
    Percentage,
    /// Value is added once, order-insensitive
    Flat,
}

impl std::fmt::Display for BonusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// One synergy rule. The rulebook is an ordered list of these; declaration
/// order is the evaluation order within each bonus kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyDefinition {
    pub name: String,
    pub kind: BonusKind,
    pub value: f64,
}

/// An activated synergy with full attribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveSynergy {
    pub name: String,
    pub kind: BonusKind,
    /// How many of the team members carry the tag
    pub members: usize,
    /// The configured bonus as actually applied (compounded for
    /// percentage synergies, the raw value for flat ones)
    pub bonus: f64,
    /// The tiered cohesion bonus granted for this synergy
    pub cohesion_bonus: f64,
}

/// Result of evaluating a rulebook against one team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergyOutcome {
    /// Active synergies in evaluation order (percentage first)
    pub active: Vec<ActiveSynergy>,
    /// Total percentage-derived bonus relative to the pre-synergy base
    pub percentage_bonus: f64,
    /// Sum of configured flat values
    pub base_flat_bonus: f64,
    /// Sum of tiered cohesion bonuses
    pub cohesion_bonus: f64,
    /// Base compounded through percentage synergies plus all flat terms
    pub subtotal: f64,
}

impl SynergyOutcome {
    /// Combined flat contribution (configured flats + cohesion)
    pub fn flat_bonus(&self) -> f64 {
        self.base_flat_bonus + self.cohesion_bonus
    }
}

/// Cohesion scale for an active synergy by carrier count
fn cohesion_multiplier(members: usize) -> f64 {
    match members {
        3 => 1.0,
        4 => 2.5,
        _ if members >= 5 => 5.0,
        _ => 0.0,
    }
}

fn carrier_count(member_synergies: &[&[String]], name: &str) -> usize {
    member_synergies
        .iter()
        .filter(|tags| tags.iter().any(|t| t == name))
        .count()
}

/// Evaluate the rulebook against a team's inherent synergy tags.
///
/// `member_synergies` holds one tag slice per team member; `base` is the
/// team's pre-synergy base score, which seeds the running subtotal that
/// percentage synergies compound on. Percentage synergies are fully
/// resolved (in rulebook order) before any flat synergy is added, so the
/// percentage group's internal order is observable in the totals.
pub fn evaluate_synergies(
    member_synergies: &[&[String]],
    rulebook: &[SynergyDefinition],
    base: f64,
) -> SynergyOutcome {
    let mut active = Vec::new();
    let mut running = base;
    let mut percentage_bonus = 0.0;
    let mut base_flat_bonus = 0.0;
    let mut cohesion_bonus = 0.0;

    for def in rulebook.iter().filter(|d| d.kind == BonusKind::Percentage) {
        let members = carrier_count(member_synergies, &def.name);
        if members < ACTIVATION_THRESHOLD {
            continue;
        }
        let bonus = running * (def.value / 100.0);
        running += bonus;
        percentage_bonus += bonus;
        let cohesion = COHESION_BASE * cohesion_multiplier(members);
        cohesion_bonus += cohesion;
        active.push(ActiveSynergy {
            name: def.name.clone(),
            kind: def.kind,
            members,
            bonus,
            cohesion_bonus: cohesion,
        });
    }

    for def in rulebook.iter().filter(|d| d.kind == BonusKind::Flat) {
        let members = carrier_count(member_synergies, &def.name);
        if members < ACTIVATION_THRESHOLD {
            continue;
        }
        base_flat_bonus += def.value;
        let cohesion = COHESION_BASE * cohesion_multiplier(members);
        cohesion_bonus += cohesion;
        active.push(ActiveSynergy {
            name: def.name.clone(),
            kind: def.kind,
            members,
            bonus: def.value,
            cohesion_bonus: cohesion,
        });
    }

    let subtotal = running + base_flat_bonus + cohesion_bonus;
    SynergyOutcome {
        active,
        percentage_bonus,
        base_flat_bonus,
        cohesion_bonus,
        subtotal,
    }
}
