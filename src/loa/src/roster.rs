//! Roster data model
//!
//! The player's collection as it arrives from an export file: champions,
//! the star tier each copy has reached, equipped gear, and an optional
//! legacy piece. Fields that name reference data (classes, rarities,
//! slots, tiers) are kept as plain strings here; they are resolved
//! against the reference tables at scoring time so that a roster from a
//! newer client still loads.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("duplicate entry id in roster: {entry_id}")]
    DuplicateEntryId { entry_id: String },

    #[error("champion {champion_id} appears in more than one roster entry")]
    DuplicateChampion { champion_id: String },

    #[error("entry {entry_id} has more than one gear piece in slot {slot}")]
    DuplicateGearSlot { entry_id: String, slot: String },
}

// ============================================================================
// Model
// ============================================================================

/// A champion as defined by the game's balance data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChampionDefinition {
    pub id: String,
    pub name: String,
    /// Class code, resolved against [`crate::reference::CHAMPION_CLASSES`]
    #[serde(default)]
    pub class: String,
    /// Rarity code, resolved against [`crate::reference::RARITY_TIERS`]
    pub base_rarity: String,
    #[serde(default)]
    pub is_healer: bool,
    /// Synergy names this champion carries, matched against the rulebook
    #[serde(default)]
    pub synergies: Vec<String>,
}

/// One equipped gear piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GearPiece {
    pub slot: String,
    pub rarity: String,
}

/// A legacy piece bound to a roster entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LegacyPiece {
    pub rarity: String,
    pub star_tier: String,
}

/// One owned copy of a champion with its progression state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterEntry {
    pub entry_id: String,
    pub champion: ChampionDefinition,
    /// Star tier code, resolved against [`crate::reference::STAR_TIERS`]
    #[serde(default)]
    pub star_tier: String,
    #[serde(default)]
    pub gear: Vec<GearPiece>,
    #[serde(default)]
    pub legacy_piece: Option<LegacyPiece>,
}

/// The full collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by its id
    pub fn entry(&self, entry_id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.entry_id == entry_id)
    }

    /// Check structural invariants: entry ids unique, no champion owned
    /// twice, at most one gear piece per slot within an entry.
    ///
    /// Returns the first violation in roster order. Unknown class codes
    /// are logged as data-quality warnings, never rejected.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut entry_ids = HashSet::new();
        let mut champion_ids = HashSet::new();

        for entry in &self.entries {
            if !entry.champion.class.is_empty()
                && crate::reference::class_by_code(&entry.champion.class).is_none()
            {
                tracing::warn!(
                    "entry {} has unknown class code: {}",
                    entry.entry_id,
                    entry.champion.class
                );
            }

            if !entry_ids.insert(entry.entry_id.as_str()) {
                return Err(RosterError::DuplicateEntryId {
                    entry_id: entry.entry_id.clone(),
                });
            }
            if !champion_ids.insert(entry.champion.id.as_str()) {
                return Err(RosterError::DuplicateChampion {
                    champion_id: entry.champion.id.clone(),
                });
            }

            let mut slots = HashSet::new();
            for piece in &entry.gear {
                if !slots.insert(piece.slot.as_str()) {
                    return Err(RosterError::DuplicateGearSlot {
                        entry_id: entry.entry_id.clone(),
                        slot: piece.slot.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
