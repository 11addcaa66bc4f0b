//! # loa
//!
//! Legends of Astra companion library - roster scoring and team
//! composition search.
//!
//! This library provides functionality to:
//! - Score individual champions from rarity, star tier, gear and legacy pieces
//! - Evaluate synergy activation and stacking for five-member teams
//! - Search a roster exhaustively for the highest-scoring team
//! - Re-score what-if member swaps against a found team
//! - Resolve game reference data (tiers, rarities, classes, gear slots)
//!
//! ## Example
//!
//! ```
//! use loa::{find_best_team, ChampionDefinition, Roster, RosterEntry, SearchConstraints};
//!
//! let entries = ["Kaelen", "Sera", "Brann", "Ophira", "Dax", "Veyra"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, name)| RosterEntry {
//!         entry_id: format!("e{i}"),
//!         champion: ChampionDefinition {
//!             id: name.to_lowercase(),
//!             name: name.to_string(),
//!             class: "vanguard".to_string(),
//!             base_rarity: "rare".to_string(),
//!             is_healer: false,
//!             synergies: vec![],
//!         },
//!         star_tier: "white_3".to_string(),
//!         gear: vec![],
//!         legacy_piece: None,
//!     })
//!     .collect();
//!
//! let roster = Roster { entries };
//! let rulebook = loa::reference::builtin_rulebook();
//! let team = find_best_team(&roster, &rulebook, &SearchConstraints::default())?;
//! println!("best team scores {:.1}", team.total());
//! # Ok::<(), loa::OptimizerError>(())
//! ```

pub mod combo;
pub mod optimizer;
pub mod reference;
pub mod roster;
pub mod score;
pub mod synergy;
pub mod team;

// Re-export commonly used items
#[doc(inline)]
pub use optimizer::{
    find_best_team, find_best_team_with_progress, OptimizerError, SearchConstraints,
    SearchProgress,
};
#[doc(inline)]
pub use roster::{ChampionDefinition, GearPiece, LegacyPiece, Roster, RosterEntry, RosterError};
#[doc(inline)]
pub use score::{
    champion_score, champion_score_parts, score_team, ChampionScoreParts, ScoreBreakdown,
};
#[doc(inline)]
pub use synergy::{evaluate_synergies, ActiveSynergy, BonusKind, SynergyDefinition, SynergyOutcome};
#[doc(inline)]
pub use team::{swap_member, Team, TeamError, TeamSession, TEAM_SIZE};
