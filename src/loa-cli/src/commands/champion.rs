//! Single-champion score command handler

use anyhow::{Context, Result};
use std::path::Path;

use loa::champion_score_parts;

use crate::file_io;

pub fn handle(roster_path: Option<&Path>, entry_id: &str) -> Result<()> {
    let roster_path = file_io::resolve_roster(roster_path)?;
    let roster = file_io::load_roster(&roster_path)?;

    let entry = roster
        .entry(entry_id)
        .with_context(|| format!("entry id '{}' not found in roster", entry_id))?;

    let parts = champion_score_parts(entry);

    println!(
        "{} ({}, {})",
        entry.champion.name,
        super::class_display(&entry.champion.class),
        entry.champion.base_rarity
    );
    if !entry.star_tier.is_empty() {
        println!("Star tier: {}", entry.star_tier);
    }
    if !entry.champion.synergies.is_empty() {
        println!("Synergies: {}", entry.champion.synergies.join(", "));
    }

    println!();
    println!("  {:<24} {:>10.1}", "Rarity base", parts.base);
    println!("  {:<24} {:>10.2}", "Star multiplier", parts.star_multiplier);
    println!("  {:<24} {:>10.1}", "Gear", parts.gear);
    println!("  {:<24} {:>10.1}", "Legacy piece", parts.legacy);
    println!("  {:<24} {:>10.1}", "Total", parts.total);

    if !entry.gear.is_empty() {
        println!();
        println!("Gear");
        for piece in &entry.gear {
            println!("  {:<10} {}", piece.slot, piece.rarity);
        }
    }

    Ok(())
}
