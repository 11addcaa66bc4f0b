//! Gear slot definitions
//!
//! Every champion has the same five equipment slots. Slot identity does
//! not affect scoring (only the equipped piece's rarity does); the table
//! exists for display and for snapshot validation.

/// Gear slot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearSlot {
    pub code: &'static str,
    pub name: &'static str,
}

/// All gear slots in display order
pub const GEAR_SLOTS: &[GearSlot] = &[
    GearSlot {
        code: "weapon",
        name: "Weapon",
    },
    GearSlot {
        code: "helm",
        name: "Helm",
    },
    GearSlot {
        code: "chest",
        name: "Chest",
    },
    GearSlot {
        code: "boots",
        name: "Boots",
    },
    GearSlot {
        code: "charm",
        name: "Charm",
    },
];

/// Get gear slot by code
pub fn gear_slot_by_code(code: &str) -> Option<&'static GearSlot> {
    GEAR_SLOTS.iter().find(|s| s.code == code)
}
