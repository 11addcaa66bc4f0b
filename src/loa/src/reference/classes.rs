//! Champion class definitions
//!
//! Class labels arrive as free strings in roster snapshots; scoring counts
//! distinct non-empty labels whether or not they are known here. The table
//! backs display names and roster-validation warnings.

/// Champion class information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionClass {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All champion classes
pub const CHAMPION_CLASSES: &[ChampionClass] = &[
    ChampionClass {
        code: "vanguard",
        name: "Vanguard",
        description: "Frontline bruisers",
    },
    ChampionClass {
        code: "sentinel",
        name: "Sentinel",
        description: "Defensive anchors",
    },
    ChampionClass {
        code: "marksman",
        name: "Marksman",
        description: "Ranged single-target damage",
    },
    ChampionClass {
        code: "mystic",
        name: "Mystic",
        description: "Area damage and debuffs",
    },
    ChampionClass {
        code: "warden",
        name: "Warden",
        description: "Sustain and protection",
    },
    ChampionClass {
        code: "trickster",
        name: "Trickster",
        description: "Control and evasion",
    },
];

/// Get champion class by code
pub fn class_by_code(code: &str) -> Option<&'static ChampionClass> {
    CHAMPION_CLASSES.iter().find(|c| c.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_lookup() {
        assert_eq!(class_by_code("vanguard").map(|c| c.name), Some("Vanguard"));
        assert_eq!(class_by_code("warden").map(|c| c.name), Some("Warden"));
        assert!(class_by_code("bard").is_none());
    }
}
