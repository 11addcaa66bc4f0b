//! Member swap command handler
//!
//! Loads a saved team, replaces one slot, and re-scores. The original
//! and edited totals are both shown so the trade is visible at a glance.

use anyhow::{Context, Result};
use std::path::Path;

use loa::{swap_member, Team};

use crate::file_io;

pub fn handle(
    roster_path: Option<&Path>,
    synergies_path: Option<&Path>,
    team_path: &Path,
    slot: usize,
    with_entry: &str,
    save: bool,
) -> Result<()> {
    let roster_path = file_io::resolve_roster(roster_path)?;
    let roster = file_io::load_roster(&roster_path)?;
    let synergies_path = file_io::resolve_synergies(synergies_path)?;
    let rulebook = file_io::load_rulebook(synergies_path.as_deref())?;

    let team_file = file_io::load_team_file(team_path)?;
    let members = file_io::members_from_ids(&roster, &team_file.members)?;
    let original = Team::new(members, &rulebook);

    let replacement = roster
        .entry(with_entry)
        .cloned()
        .with_context(|| format!("entry id '{}' not found in roster", with_entry))?;

    let swapped = swap_member(&original, slot, replacement, &rulebook).context("Swap rejected")?;

    println!(
        "Swapped slot {} ({} -> {})",
        slot, original.members[slot].champion.name, swapped.members[slot].champion.name
    );
    println!("Total before swap: {:>10.1}", original.total());
    println!("Total after swap:  {:>10.1}", swapped.total());
    println!();
    super::print_team(&swapped);

    if save {
        file_io::save_team_file(team_path, &swapped)?;
        println!();
        println!("Team saved to {}", team_path.display());
    }

    Ok(())
}
