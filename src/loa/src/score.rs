//! Champion and team scoring
//!
//! Two layers: a per-champion score derived from rarity, star tier, gear
//! and legacy piece, and a team score that runs the synergy evaluator
//! over five members and applies the class-diversity multiplier. Every
//! intermediate term is kept in the returned breakdown so a score can be
//! re-derived from it without re-running the pipeline.
//!
//! Codes that do not resolve against the reference tables score at their
//! neutral value and emit a warning; stale snapshot data must never
//! abort a search.

use serde::Serialize;

use crate::reference::{
    rarity_by_code, star_tier_by_code, NEUTRAL_LEGACY_BONUS, NEUTRAL_MULTIPLIER,
};
use crate::roster::RosterEntry;
use crate::synergy::{evaluate_synergies, ActiveSynergy, SynergyDefinition};
use crate::team::TEAM_SIZE;

/// Multiplier applied when a team fields enough distinct classes
pub const DIVERSITY_MULTIPLIER: f64 = 1.15;

/// Distinct non-empty classes needed for the diversity multiplier
pub const DIVERSITY_THRESHOLD: usize = 4;

// ============================================================================
// Champion score
// ============================================================================

/// Per-term breakdown of one champion's individual score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChampionScoreParts {
    /// Base score of the champion's rarity
    pub base: f64,
    /// Star tier multiplier applied to the base
    pub star_multiplier: f64,
    /// Summed gear rarity scores
    pub gear: f64,
    /// Legacy piece score (rarity base plus tier bonus), 0 when none
    pub legacy: f64,
    pub total: f64,
}

/// Score one roster entry in isolation.
///
/// `base × starMultiplier + gear + legacy`, with each term resolved
/// leniently against the reference tables.
pub fn champion_score(entry: &RosterEntry) -> f64 {
    champion_score_parts(entry).total
}

/// Like [`champion_score`], but keeps the individual terms
pub fn champion_score_parts(entry: &RosterEntry) -> ChampionScoreParts {
    let base = rarity_base(&entry.champion.base_rarity);
    let star_multiplier = tier_multiplier(&entry.star_tier);

    let gear: f64 = entry
        .gear
        .iter()
        .map(|piece| {
            if crate::reference::gear_slot_by_code(&piece.slot).is_none() {
                tracing::warn!("unknown gear slot code: {}", piece.slot);
            }
            gear_rarity(&piece.rarity)
        })
        .sum();

    let legacy = entry
        .legacy_piece
        .as_ref()
        .map(|piece| rarity_base(&piece.rarity) + tier_legacy_bonus(&piece.star_tier))
        .unwrap_or(0.0);

    let total = base * star_multiplier + gear + legacy;
    ChampionScoreParts {
        base,
        star_multiplier,
        gear,
        legacy,
        total,
    }
}

fn rarity_base(code: &str) -> f64 {
    match rarity_by_code(code) {
        Some(rarity) => rarity.base_score,
        None => {
            tracing::warn!("unknown rarity code: {}", code);
            0.0
        }
    }
}

fn gear_rarity(code: &str) -> f64 {
    match rarity_by_code(code) {
        Some(rarity) => rarity.gear_score,
        None => {
            tracing::warn!("unknown gear rarity code: {}", code);
            0.0
        }
    }
}

fn tier_multiplier(code: &str) -> f64 {
    if code.is_empty() {
        return NEUTRAL_MULTIPLIER;
    }
    match star_tier_by_code(code) {
        Some(tier) => tier.champion_multiplier,
        None => {
            tracing::warn!("unknown star tier code: {}", code);
            NEUTRAL_MULTIPLIER
        }
    }
}

fn tier_legacy_bonus(code: &str) -> f64 {
    if code.is_empty() {
        return NEUTRAL_LEGACY_BONUS;
    }
    match star_tier_by_code(code) {
        Some(tier) => tier.legacy_bonus,
        None => {
            tracing::warn!("unknown star tier code: {}", code);
            NEUTRAL_LEGACY_BONUS
        }
    }
}

// ============================================================================
// Team score
// ============================================================================

/// Full audit trail for one team score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of the five individual champion scores
    pub base: f64,
    /// Total added by percentage synergies (compounded)
    pub percentage_bonus: f64,
    /// Total flat synergy contribution, cohesion included
    pub flat_bonus: f64,
    /// Flat synergy values alone
    pub base_flat_bonus: f64,
    /// Tiered cohesion contribution alone
    pub cohesion_bonus: f64,
    /// `base` compounded through percentage synergies, plus `flat_bonus`
    pub subtotal_after_synergies: f64,
    /// Distinct non-empty class labels among the members
    pub distinct_classes: usize,
    pub diversity_applied: bool,
    /// Delta added by the diversity multiplier, 0 when not applied
    pub diversity_bonus: f64,
    pub total: f64,
    pub active_synergies: Vec<ActiveSynergy>,
}

/// Score a full team.
///
/// The one scoring path: the optimizer, the swap re-scorer and the CLI
/// all go through here, so a breakdown is comparable no matter where it
/// came from.
pub fn score_team(members: &[RosterEntry], rulebook: &[SynergyDefinition]) -> ScoreBreakdown {
    let refs: Vec<&RosterEntry> = members.iter().collect();
    let base = members.iter().map(champion_score).sum();
    score_team_refs(&refs, rulebook, base)
}

/// Team score over borrowed members with the base sum already known.
///
/// The search driver computes each entry's individual score once per run
/// and sums cached values per candidate team; everything past the base
/// sum is identical to [`score_team`].
pub(crate) fn score_team_refs(
    members: &[&RosterEntry],
    rulebook: &[SynergyDefinition],
    base: f64,
) -> ScoreBreakdown {
    debug_assert_eq!(members.len(), TEAM_SIZE);

    let member_synergies: Vec<&[String]> = members
        .iter()
        .map(|e| e.champion.synergies.as_slice())
        .collect();
    let outcome = evaluate_synergies(&member_synergies, rulebook, base);

    let distinct_classes = count_distinct_classes(members);
    let diversity_applied = distinct_classes >= DIVERSITY_THRESHOLD;
    let diversity_bonus = if diversity_applied {
        outcome.subtotal * (DIVERSITY_MULTIPLIER - 1.0)
    } else {
        0.0
    };

    ScoreBreakdown {
        base,
        percentage_bonus: outcome.percentage_bonus,
        flat_bonus: outcome.flat_bonus(),
        base_flat_bonus: outcome.base_flat_bonus,
        cohesion_bonus: outcome.cohesion_bonus,
        subtotal_after_synergies: outcome.subtotal,
        distinct_classes,
        diversity_applied,
        diversity_bonus,
        total: outcome.subtotal + diversity_bonus,
        active_synergies: outcome.active,
    }
}

fn count_distinct_classes(members: &[&RosterEntry]) -> usize {
    let mut seen: Vec<&str> = Vec::with_capacity(members.len());
    for entry in members {
        let class = entry.champion.class.as_str();
        if !class.is_empty() && !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.len()
}
