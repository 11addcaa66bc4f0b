//! Rarity tier definitions
//!
//! One ordered ladder shared by champions, legacy pieces, and gear.
//! Champions and legacy pieces read `base_score`; gear pieces read the
//! smaller `gear_score` column.

/// Rarity tier information
#[derive(Debug, Clone, PartialEq)]
pub struct RarityTier {
    pub tier: u8,
    pub code: &'static str,
    pub name: &'static str,
    /// Base score for a champion or legacy piece of this rarity
    pub base_score: f64,
    /// Score contributed by one equipped gear piece of this rarity
    pub gear_score: f64,
}

/// All rarity tiers in order
pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier {
        tier: 1,
        code: "common",
        name: "Common",
        base_score: 100.0,
        gear_score: 8.0,
    },
    RarityTier {
        tier: 2,
        code: "uncommon",
        name: "Uncommon",
        base_score: 150.0,
        gear_score: 14.0,
    },
    RarityTier {
        tier: 3,
        code: "rare",
        name: "Rare",
        base_score: 225.0,
        gear_score: 22.0,
    },
    RarityTier {
        tier: 4,
        code: "epic",
        name: "Epic",
        base_score: 340.0,
        gear_score: 34.0,
    },
    RarityTier {
        tier: 5,
        code: "legendary",
        name: "Legendary",
        base_score: 510.0,
        gear_score: 50.0,
    },
    RarityTier {
        tier: 6,
        code: "mythic",
        name: "Mythic",
        base_score: 765.0,
        gear_score: 70.0,
    },
];

/// Get rarity tier by code
pub fn rarity_by_code(code: &str) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.code == code)
}

/// Get rarity tier by tier number
pub fn rarity_by_tier(tier: u8) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.tier == tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_lookup() {
        assert_eq!(rarity_by_code("common").map(|r| r.name), Some("Common"));
        assert_eq!(rarity_by_code("mythic").map(|r| r.tier), Some(6));
        assert_eq!(rarity_by_tier(4).map(|r| r.code), Some("epic"));
        assert!(rarity_by_code("exotic").is_none());
    }

    #[test]
    fn test_scores_strictly_increasing() {
        for pair in RARITY_TIERS.windows(2) {
            assert!(pair[1].base_score > pair[0].base_score);
            assert!(pair[1].gear_score > pair[0].gear_score);
        }
    }
}
