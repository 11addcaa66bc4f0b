//! Star/color tier progression definitions
//!
//! Champions and legacy pieces advance through the same 26-step ladder:
//! Unlocked, then five colors (White, Blue, Purple, Gold, Red) with five
//! star levels each. The two item kinds read different columns of the
//! table: champions use the multiplicative `champion_multiplier`, legacy
//! pieces use the additive `legacy_bonus`.

/// One step of the star/color tier ladder
#[derive(Debug, Clone, PartialEq)]
pub struct StarTierStep {
    /// Position in the ladder, 0 = Unlocked, 25 = Red 5
    pub step: u8,
    pub code: &'static str,
    pub name: &'static str,
    /// Multiplier applied to a champion's base rarity score
    pub champion_multiplier: f64,
    /// Flat bonus contributed by a legacy piece at this tier
    pub legacy_bonus: f64,
}

/// All star/color tiers in ascension order
pub const STAR_TIERS: &[StarTierStep] = &[
    StarTierStep {
        step: 0,
        code: "unlocked",
        name: "Unlocked",
        champion_multiplier: 1.00,
        legacy_bonus: 0.0,
    },
    StarTierStep {
        step: 1,
        code: "white_1",
        name: "White 1",
        champion_multiplier: 1.03,
        legacy_bonus: 4.0,
    },
    StarTierStep {
        step: 2,
        code: "white_2",
        name: "White 2",
        champion_multiplier: 1.06,
        legacy_bonus: 8.0,
    },
    StarTierStep {
        step: 3,
        code: "white_3",
        name: "White 3",
        champion_multiplier: 1.09,
        legacy_bonus: 12.0,
    },
    StarTierStep {
        step: 4,
        code: "white_4",
        name: "White 4",
        champion_multiplier: 1.12,
        legacy_bonus: 16.0,
    },
    StarTierStep {
        step: 5,
        code: "white_5",
        name: "White 5",
        champion_multiplier: 1.16,
        legacy_bonus: 20.0,
    },
    StarTierStep {
        step: 6,
        code: "blue_1",
        name: "Blue 1",
        champion_multiplier: 1.20,
        legacy_bonus: 24.0,
    },
    StarTierStep {
        step: 7,
        code: "blue_2",
        name: "Blue 2",
        champion_multiplier: 1.24,
        legacy_bonus: 28.0,
    },
    StarTierStep {
        step: 8,
        code: "blue_3",
        name: "Blue 3",
        champion_multiplier: 1.28,
        legacy_bonus: 32.0,
    },
    StarTierStep {
        step: 9,
        code: "blue_4",
        name: "Blue 4",
        champion_multiplier: 1.32,
        legacy_bonus: 36.0,
    },
    StarTierStep {
        step: 10,
        code: "blue_5",
        name: "Blue 5",
        champion_multiplier: 1.37,
        legacy_bonus: 40.0,
    },
    StarTierStep {
        step: 11,
        code: "purple_1",
        name: "Purple 1",
        champion_multiplier: 1.42,
        legacy_bonus: 44.0,
    },
    StarTierStep {
        step: 12,
        code: "purple_2",
        name: "Purple 2",
        champion_multiplier: 1.47,
        legacy_bonus: 48.0,
    },
    StarTierStep {
        step: 13,
        code: "purple_3",
        name: "Purple 3",
        champion_multiplier: 1.52,
        legacy_bonus: 52.0,
    },
    StarTierStep {
        step: 14,
        code: "purple_4",
        name: "Purple 4",
        champion_multiplier: 1.58,
        legacy_bonus: 56.0,
    },
    StarTierStep {
        step: 15,
        code: "purple_5",
        name: "Purple 5",
        champion_multiplier: 1.64,
        legacy_bonus: 60.0,
    },
    StarTierStep {
        step: 16,
        code: "gold_1",
        name: "Gold 1",
        champion_multiplier: 1.70,
        legacy_bonus: 64.0,
    },
    StarTierStep {
        step: 17,
        code: "gold_2",
        name: "Gold 2",
        champion_multiplier: 1.77,
        legacy_bonus: 68.0,
    },
    StarTierStep {
        step: 18,
        code: "gold_3",
        name: "Gold 3",
        champion_multiplier: 1.84,
        legacy_bonus: 72.0,
    },
    StarTierStep {
        step: 19,
        code: "gold_4",
        name: "Gold 4",
        champion_multiplier: 1.91,
        legacy_bonus: 76.0,
    },
    StarTierStep {
        step: 20,
        code: "gold_5",
        name: "Gold 5",
        champion_multiplier: 1.99,
        legacy_bonus: 80.0,
    },
    StarTierStep {
        step: 21,
        code: "red_1",
        name: "Red 1",
        champion_multiplier: 2.03,
        legacy_bonus: 84.0,
    },
    StarTierStep {
        step: 22,
        code: "red_2",
        name: "Red 2",
        champion_multiplier: 2.07,
        legacy_bonus: 88.0,
    },
    StarTierStep {
        step: 23,
        code: "red_3",
        name: "Red 3",
        champion_multiplier: 2.11,
        legacy_bonus: 92.0,
    },
    StarTierStep {
        step: 24,
        code: "red_4",
        name: "Red 4",
        champion_multiplier: 2.15,
        legacy_bonus: 96.0,
    },
    StarTierStep {
        step: 25,
        code: "red_5",
        name: "Red 5",
        champion_multiplier: 2.20,
        legacy_bonus: 100.0,
    },
];

/// Neutral champion multiplier used when a tier code is unknown
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Neutral legacy bonus used when a tier code is unknown
pub const NEUTRAL_LEGACY_BONUS: f64 = 0.0;

/// Get a star tier by code
pub fn star_tier_by_code(code: &str) -> Option<&'static StarTierStep> {
    STAR_TIERS.iter().find(|t| t.code == code)
}

/// Get a star tier by ladder position
pub fn star_tier_by_step(step: u8) -> Option<&'static StarTierStep> {
    STAR_TIERS.iter().find(|t| t.step == step)
}
