//! Static reference tables
//!
//! Game-balance data that changes only with client patches: star tier
//! multipliers, rarity scores, gear slots, champion classes, and the
//! built-in synergy rulebook. Lookups are by string code and return
//! `None` for codes this build does not know about; callers decide how
//! lenient to be.

mod classes;
mod gear;
mod rarity;
mod synergies;
mod tiers;

pub use classes::{class_by_code, ChampionClass, CHAMPION_CLASSES};
pub use gear::{gear_slot_by_code, GearSlot, GEAR_SLOTS};
pub use rarity::{rarity_by_code, rarity_by_tier, RarityTier, RARITY_TIERS};
pub use synergies::builtin_rulebook;
pub use tiers::{
    star_tier_by_code, star_tier_by_step, StarTierStep, NEUTRAL_LEGACY_BONUS, NEUTRAL_MULTIPLIER,
    STAR_TIERS,
};
