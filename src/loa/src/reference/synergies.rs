//! Built-in synergy rulebook
//!
//! The live rulebook is normally supplied by the caller (it ships with the
//! game's balance data); this table is the fallback used when none is
//! given. Declaration order matters: it is the evaluation order within
//! each bonus kind.

use crate::synergy::{BonusKind, SynergyDefinition};

struct BuiltinSynergy {
    name: &'static str,
    kind: BonusKind,
    value: f64,
}

const BUILTIN_SYNERGIES: &[BuiltinSynergy] = &[
    BuiltinSynergy {
        name: "Astral Concord",
        kind: BonusKind::Percentage,
        value: 12.0,
    },
    BuiltinSynergy {
        name: "Ironblood Pact",
        kind: BonusKind::Percentage,
        value: 8.0,
    },
    BuiltinSynergy {
        name: "Twilight Covenant",
        kind: BonusKind::Percentage,
        value: 10.0,
    },
    BuiltinSynergy {
        name: "Stormcallers",
        kind: BonusKind::Percentage,
        value: 15.0,
    },
    BuiltinSynergy {
        name: "Emberforged",
        kind: BonusKind::Flat,
        value: 90.0,
    },
    BuiltinSynergy {
        name: "Frostbound Oath",
        kind: BonusKind::Flat,
        value: 60.0,
    },
    BuiltinSynergy {
        name: "Silverwing Order",
        kind: BonusKind::Flat,
        value: 75.0,
    },
    BuiltinSynergy {
        name: "Gravewatch",
        kind: BonusKind::Percentage,
        value: 6.0,
    },
    BuiltinSynergy {
        name: "Dawnshield",
        kind: BonusKind::Flat,
        value: 45.0,
    },
    BuiltinSynergy {
        name: "Runeweavers",
        kind: BonusKind::Flat,
        value: 9.0,
    },
];

/// The built-in rulebook as an owned list, in declaration order
pub fn builtin_rulebook() -> Vec<SynergyDefinition> {
    BUILTIN_SYNERGIES
        .iter()
        .map(|s| SynergyDefinition {
            name: s.name.to_string(),
            kind: s.kind,
            value: s.value,
        })
        .collect()
}
