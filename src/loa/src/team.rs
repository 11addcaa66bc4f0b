//! Teams and interactive re-scoring
//!
//! A [`Team`] pairs five roster entries with the breakdown they scored
//! at. [`swap_member`] produces an edited copy re-scored through the
//! same pipeline as the search, and [`TeamSession`] layers the
//! original/current bookkeeping for an edit loop on top of it. Swaps
//! are synchronous; callers serialize them.

use serde::Serialize;
use thiserror::Error;

use crate::roster::RosterEntry;
use crate::score::{score_team, ScoreBreakdown};
use crate::synergy::SynergyDefinition;

/// Number of members in a team
pub const TEAM_SIZE: usize = 5;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeamError {
    #[error("champion {champion_id} is already on the team")]
    DuplicateChampion { champion_id: String },

    #[error("slot {slot} is out of range for a team of {size}")]
    SlotOutOfRange { slot: usize, size: usize },
}

// ============================================================================
// Team
// ============================================================================

/// Five members plus the breakdown they were scored with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub members: Vec<RosterEntry>,
    pub breakdown: ScoreBreakdown,
}

impl Team {
    /// Score a member list and bind the result
    pub fn new(members: Vec<RosterEntry>, rulebook: &[SynergyDefinition]) -> Team {
        let breakdown = score_team(&members, rulebook);
        Team { members, breakdown }
    }

    pub fn total(&self) -> f64 {
        self.breakdown.total
    }
}

/// Replace the member at `slot` and re-score.
///
/// Rejects a slot outside the team and a replacement whose champion is
/// already fielded in another slot. Re-scoring runs the full pipeline,
/// so the returned breakdown is exactly what the search would have
/// produced for the edited line-up.
pub fn swap_member(
    team: &Team,
    slot: usize,
    replacement: RosterEntry,
    rulebook: &[SynergyDefinition],
) -> Result<Team, TeamError> {
    if slot >= team.members.len() {
        return Err(TeamError::SlotOutOfRange {
            slot,
            size: team.members.len(),
        });
    }
    for (i, member) in team.members.iter().enumerate() {
        if i != slot && member.champion.id == replacement.champion.id {
            return Err(TeamError::DuplicateChampion {
                champion_id: replacement.champion.id.clone(),
            });
        }
    }

    let mut members = team.members.clone();
    members[slot] = replacement;
    Ok(Team::new(members, rulebook))
}

// ============================================================================
// Session
// ============================================================================

/// Edit loop state: the team the search produced and the team as
/// currently edited
#[derive(Debug, Clone)]
pub struct TeamSession {
    original: Team,
    current: Team,
}

impl TeamSession {
    pub fn new(team: Team) -> TeamSession {
        TeamSession {
            original: team.clone(),
            current: team,
        }
    }

    pub fn original(&self) -> &Team {
        &self.original
    }

    pub fn current(&self) -> &Team {
        &self.current
    }

    /// Swap a member of the current team; the original is untouched
    pub fn swap(
        &mut self,
        slot: usize,
        replacement: RosterEntry,
        rulebook: &[SynergyDefinition],
    ) -> Result<&Team, TeamError> {
        self.current = swap_member(&self.current, slot, replacement, rulebook)?;
        Ok(&self.current)
    }

    /// Discard edits and restore the original team
    pub fn reset(&mut self) -> &Team {
        self.current = self.original.clone();
        &self.current
    }
}
