//! Roster listing command handler

use anyhow::Result;
use std::path::Path;

use loa::{champion_score, RosterEntry};

use crate::file_io;

pub fn handle(roster_path: Option<&Path>) -> Result<()> {
    let roster_path = file_io::resolve_roster(roster_path)?;
    let roster = file_io::load_roster(&roster_path)?;

    println!("Roster: {} entries\n", roster.len());
    println!(
        "{:<10} {:<20} {:<11} {:<11} {:<9} {:<7} {:>9}",
        "Entry", "Champion", "Class", "Rarity", "Tier", "Healer", "Score"
    );
    println!("{}", "-".repeat(81));

    let mut rows: Vec<(&RosterEntry, f64)> = roster
        .entries
        .iter()
        .map(|entry| (entry, champion_score(entry)))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (entry, score) in rows {
        println!(
            "{:<10} {:<20} {:<11} {:<11} {:<9} {:<7} {:>9.1}",
            entry.entry_id,
            entry.champion.name,
            super::class_display(&entry.champion.class),
            entry.champion.base_rarity,
            if entry.star_tier.is_empty() {
                "-"
            } else {
                &entry.star_tier
            },
            if entry.champion.is_healer { "yes" } else { "" },
            score
        );
    }

    Ok(())
}
