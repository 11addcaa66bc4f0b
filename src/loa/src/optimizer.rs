//! Best-team search
//!
//! Exhaustive enumeration over five-member subsets of the eligible
//! roster, scored through the team scoring pipeline. The enumeration
//! order is fixed (see [`crate::combo`]) and ties keep the first team
//! found, so a given roster and rulebook always produce the same
//! result. The search runs on the calling thread with no suspension
//! points; callers that need responsiveness invoke it off their hot
//! path and watch the progress hook.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::combo::{count_combinations, Combinations};
use crate::roster::{Roster, RosterEntry};
use crate::score::{champion_score, score_team_refs, ScoreBreakdown};
use crate::synergy::SynergyDefinition;
use crate::team::{Team, TEAM_SIZE};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptimizerError {
    #[error("not enough eligible roster entries: {available} available, {required} required")]
    InsufficientRoster { available: usize, required: usize },

    #[error("healer required but the eligible roster has none")]
    NoHealerAvailable,
}

// ============================================================================
// Constraints & progress
// ============================================================================

/// What the search may and must field
#[derive(Debug, Clone, Default)]
pub struct SearchConstraints {
    /// Anchor every candidate team on a healer
    pub require_healer: bool,
    /// Champion ids excluded from the search, e.g. members of another
    /// saved team
    pub exclude: HashSet<String>,
}

/// Coarse search progress, reported at fixed enumeration intervals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchProgress {
    pub evaluated: u64,
    pub total: u64,
    pub best_score: f64,
}

// ============================================================================
// Search
// ============================================================================

/// Find the highest-scoring five-member team.
///
/// Excluded champions are removed first; the remaining entries must
/// still cover a full team. With `require_healer` set, candidates are
/// generated per healer: each eligible healer takes slot 0 and the
/// other four slots run over combinations of non-healers, so no
/// healer-less line-up is ever generated or scored.
pub fn find_best_team(
    roster: &Roster,
    rulebook: &[SynergyDefinition],
    constraints: &SearchConstraints,
) -> Result<Team, OptimizerError> {
    find_best_team_with_progress(roster, rulebook, constraints, 0, |_| {})
}

/// [`find_best_team`] with a progress hook.
///
/// `progress_every` is the enumeration interval between reports; 0
/// disables reporting. The hook runs inline on the search thread, so it
/// should stay cheap.
pub fn find_best_team_with_progress(
    roster: &Roster,
    rulebook: &[SynergyDefinition],
    constraints: &SearchConstraints,
    progress_every: u64,
    mut on_progress: impl FnMut(&SearchProgress),
) -> Result<Team, OptimizerError> {
    let eligible: Vec<&RosterEntry> = roster
        .entries
        .iter()
        .filter(|e| !constraints.exclude.contains(&e.champion.id))
        .collect();

    if eligible.len() < TEAM_SIZE {
        return Err(OptimizerError::InsufficientRoster {
            available: eligible.len(),
            required: TEAM_SIZE,
        });
    }

    // Individual scores never change during a search; compute them once.
    let scores: Vec<f64> = eligible.iter().map(|e| champion_score(e)).collect();

    let mut healers: Vec<usize> = Vec::new();
    let mut others: Vec<usize> = Vec::new();
    if constraints.require_healer {
        for (i, entry) in eligible.iter().enumerate() {
            if entry.champion.is_healer {
                healers.push(i);
            } else {
                others.push(i);
            }
        }
        if healers.is_empty() {
            return Err(OptimizerError::NoHealerAvailable);
        }
        if others.len() < TEAM_SIZE - 1 {
            return Err(OptimizerError::InsufficientRoster {
                available: others.len(),
                required: TEAM_SIZE - 1,
            });
        }
    }

    let total = if constraints.require_healer {
        healers.len() as u64 * count_combinations(others.len(), TEAM_SIZE - 1)
    } else {
        count_combinations(eligible.len(), TEAM_SIZE)
    };
    tracing::debug!(
        "searching {} candidate teams across {} eligible entries",
        total,
        eligible.len()
    );

    let mut best: Option<(Vec<usize>, ScoreBreakdown)> = None;
    let mut best_total = f64::NEG_INFINITY;
    let mut evaluated: u64 = 0;

    // Candidates are index sets into `eligible`; ties keep the first one.
    let mut consider = |indices: &[usize]| {
        evaluated += 1;
        let members: Vec<&RosterEntry> = indices.iter().map(|&i| eligible[i]).collect();
        let base: f64 = indices.iter().map(|&i| scores[i]).sum();
        let breakdown = score_team_refs(&members, rulebook, base);
        if breakdown.total > best_total {
            best_total = breakdown.total;
            best = Some((indices.to_vec(), breakdown));
        }
        if progress_every > 0 && evaluated % progress_every == 0 {
            on_progress(&SearchProgress {
                evaluated,
                total,
                best_score: best_total,
            });
        }
    };

    if constraints.require_healer {
        let mut scratch: Vec<usize> = Vec::with_capacity(TEAM_SIZE);
        for &healer in &healers {
            for combo in Combinations::new(others.len(), TEAM_SIZE - 1) {
                scratch.clear();
                scratch.push(healer);
                scratch.extend(combo.iter().map(|&c| others[c]));
                consider(&scratch);
            }
        }
    } else {
        for combo in Combinations::new(eligible.len(), TEAM_SIZE) {
            consider(&combo);
        }
    }

    best.map(|(indices, breakdown)| Team {
        members: indices.iter().map(|&i| eligible[i].clone()).collect(),
        breakdown,
    })
    .ok_or(OptimizerError::InsufficientRoster {
        available: eligible.len(),
        required: TEAM_SIZE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::Combinations;
    use crate::roster::ChampionDefinition;
    use crate::score::score_team;
    use crate::synergy::BonusKind;

    fn entry(id: &str, rarity: &str, class: &str, healer: bool, synergies: &[&str]) -> RosterEntry {
        RosterEntry {
            entry_id: format!("entry-{id}"),
            champion: ChampionDefinition {
                id: id.to_string(),
                name: id.to_string(),
                class: class.to_string(),
                base_rarity: rarity.to_string(),
                is_healer: healer,
                synergies: synergies.iter().map(|s| s.to_string()).collect(),
            },
            star_tier: String::new(),
            gear: Vec::new(),
            legacy_piece: None,
        }
    }

    fn roster_of(entries: Vec<RosterEntry>) -> Roster {
        Roster { entries }
    }

    fn member_ids(team: &Team) -> Vec<&str> {
        team.members.iter().map(|m| m.champion.id.as_str()).collect()
    }

    #[test]
    fn test_picks_highest_scoring_subset() {
        let roster = roster_of(vec![
            entry("a", "common", "vanguard", false, &[]),
            entry("b", "common", "vanguard", false, &[]),
            entry("c", "common", "vanguard", false, &[]),
            entry("d", "common", "vanguard", false, &[]),
            entry("e", "rare", "vanguard", false, &[]),
            entry("f", "epic", "vanguard", false, &[]),
        ]);
        let team = find_best_team(&roster, &[], &SearchConstraints::default()).unwrap();

        // drops one of the four commons, keeps the rare and the epic
        assert_eq!(team.total(), 300.0 + 225.0 + 340.0);
        let ids = member_ids(&team);
        assert!(ids.contains(&"e"));
        assert!(ids.contains(&"f"));
    }

    #[test]
    fn test_global_maximum_over_enumerated_space() {
        let rulebook = vec![
            SynergyDefinition {
                name: "Pack Hunters".to_string(),
                kind: BonusKind::Percentage,
                value: 10.0,
            },
            SynergyDefinition {
                name: "Shield Wall".to_string(),
                kind: BonusKind::Flat,
                value: 40.0,
            },
        ];
        let entries = vec![
            entry("a", "common", "vanguard", false, &["Pack Hunters"]),
            entry("b", "uncommon", "sentinel", false, &["Pack Hunters"]),
            entry("c", "rare", "marksman", false, &["Shield Wall"]),
            entry("d", "common", "mystic", false, &["Pack Hunters", "Shield Wall"]),
            entry("e", "epic", "warden", false, &[]),
            entry("f", "common", "trickster", false, &["Shield Wall"]),
            entry("g", "rare", "vanguard", false, &["Pack Hunters"]),
            entry("h", "uncommon", "mystic", false, &[]),
        ];
        let roster = roster_of(entries.clone());
        let team = find_best_team(&roster, &rulebook, &SearchConstraints::default()).unwrap();

        let mut max_total = f64::NEG_INFINITY;
        for combo in Combinations::new(entries.len(), 5) {
            let members: Vec<RosterEntry> = combo.iter().map(|&i| entries[i].clone()).collect();
            let breakdown = score_team(&members, &rulebook);
            assert!(breakdown.total <= team.total() + 1e-9);
            if breakdown.total > max_total {
                max_total = breakdown.total;
            }
        }
        assert!((team.total() - max_total).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_keeps_first_enumerated() {
        let entries: Vec<RosterEntry> = (0..6)
            .map(|i| entry(&format!("c{i}"), "common", "vanguard", false, &[]))
            .collect();
        let roster = roster_of(entries);
        let team = find_best_team(&roster, &[], &SearchConstraints::default()).unwrap();

        assert_eq!(member_ids(&team), vec!["c0", "c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_insufficient_roster() {
        let entries: Vec<RosterEntry> = (0..4)
            .map(|i| entry(&format!("c{i}"), "common", "vanguard", false, &[]))
            .collect();
        let err = find_best_team(&roster_of(entries), &[], &SearchConstraints::default())
            .unwrap_err();
        assert_eq!(
            err,
            OptimizerError::InsufficientRoster {
                available: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_exclusion_respected() {
        let roster = roster_of(vec![
            entry("a", "common", "vanguard", false, &[]),
            entry("b", "common", "vanguard", false, &[]),
            entry("c", "common", "vanguard", false, &[]),
            entry("d", "common", "vanguard", false, &[]),
            entry("e", "common", "vanguard", false, &[]),
            entry("f", "legendary", "vanguard", false, &[]),
        ]);
        let constraints = SearchConstraints {
            exclude: HashSet::from(["f".to_string()]),
            ..Default::default()
        };
        let team = find_best_team(&roster, &[], &constraints).unwrap();
        assert!(!member_ids(&team).contains(&"f"));
        assert_eq!(team.total(), 500.0);
    }

    #[test]
    fn test_exclusion_can_starve_roster() {
        let entries: Vec<RosterEntry> = (0..5)
            .map(|i| entry(&format!("c{i}"), "common", "vanguard", false, &[]))
            .collect();
        let constraints = SearchConstraints {
            exclude: HashSet::from(["c0".to_string()]),
            ..Default::default()
        };
        let err = find_best_team(&roster_of(entries), &[], &constraints).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::InsufficientRoster {
                available: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_no_healer_available() {
        let entries: Vec<RosterEntry> = (0..6)
            .map(|i| entry(&format!("c{i}"), "common", "vanguard", false, &[]))
            .collect();
        let constraints = SearchConstraints {
            require_healer: true,
            ..Default::default()
        };
        let err = find_best_team(&roster_of(entries), &[], &constraints).unwrap_err();
        assert_eq!(err, OptimizerError::NoHealerAvailable);
    }

    #[test]
    fn test_too_few_non_healers() {
        let roster = roster_of(vec![
            entry("h1", "common", "mystic", true, &[]),
            entry("h2", "common", "mystic", true, &[]),
            entry("a", "common", "vanguard", false, &[]),
            entry("b", "common", "vanguard", false, &[]),
            entry("c", "common", "vanguard", false, &[]),
        ]);
        let constraints = SearchConstraints {
            require_healer: true,
            ..Default::default()
        };
        let err = find_best_team(&roster, &[], &constraints).unwrap_err();
        assert_eq!(
            err,
            OptimizerError::InsufficientRoster {
                available: 3,
                required: 4
            }
        );
    }

    #[test]
    fn test_required_healer_takes_slot_zero() {
        let roster = roster_of(vec![
            entry("h1", "common", "mystic", true, &[]),
            entry("h2", "epic", "warden", true, &[]),
            entry("a", "common", "vanguard", false, &[]),
            entry("b", "common", "sentinel", false, &[]),
            entry("c", "common", "marksman", false, &[]),
            entry("d", "common", "trickster", false, &[]),
            entry("e", "rare", "vanguard", false, &[]),
        ]);
        let constraints = SearchConstraints {
            require_healer: true,
            ..Default::default()
        };
        let team = find_best_team(&roster, &[], &constraints).unwrap();

        assert!(team.members[0].champion.is_healer);
        assert_eq!(team.members[0].champion.id, "h2");
        let healers = team
            .members
            .iter()
            .filter(|m| m.champion.is_healer)
            .count();
        assert_eq!(healers, 1);
    }

    #[test]
    fn test_anchored_enumeration_size() {
        // 2 healers x C(5, 4) non-healer combinations = 10 candidates
        let roster = roster_of(vec![
            entry("h1", "common", "mystic", true, &[]),
            entry("h2", "common", "warden", true, &[]),
            entry("a", "common", "vanguard", false, &[]),
            entry("b", "common", "vanguard", false, &[]),
            entry("c", "common", "vanguard", false, &[]),
            entry("d", "common", "vanguard", false, &[]),
            entry("e", "common", "vanguard", false, &[]),
        ]);
        let constraints = SearchConstraints {
            require_healer: true,
            ..Default::default()
        };

        let mut last_evaluated = 0;
        find_best_team_with_progress(&roster, &[], &constraints, 1, |p| {
            last_evaluated = p.evaluated;
            assert_eq!(p.total, 10);
        })
        .unwrap();
        assert_eq!(last_evaluated, 10);
    }

    #[test]
    fn test_progress_reported_at_interval() {
        let entries: Vec<RosterEntry> = (0..7)
            .map(|i| entry(&format!("c{i}"), "common", "vanguard", false, &[]))
            .collect();
        let roster = roster_of(entries);

        let mut seen: Vec<SearchProgress> = Vec::new();
        find_best_team_with_progress(&roster, &[], &SearchConstraints::default(), 5, |p| {
            seen.push(*p)
        })
        .unwrap();

        // C(7,5) = 21 candidates, reports at 5, 10, 15, 20
        let evaluated: Vec<u64> = seen.iter().map(|p| p.evaluated).collect();
        assert_eq!(evaluated, vec![5, 10, 15, 20]);
        assert!(seen.iter().all(|p| p.total == 21));
        assert!(seen.iter().all(|p| p.best_score == 500.0));
    }
}
