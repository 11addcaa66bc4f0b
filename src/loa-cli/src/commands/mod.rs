//! Command handlers for the loa CLI
//!
//! Each subcommand has its own module with handler functions. The team
//! and breakdown tables live here because optimize, score and swap all
//! print the same layout.

pub mod champion;
pub mod configure;
pub mod optimize;
pub mod roster;
pub mod score;
pub mod swap;

use loa::{ScoreBreakdown, Team};

/// Resolve a class code for display, falling back to the raw code
pub fn class_display(code: &str) -> &str {
    if code.is_empty() {
        return "-";
    }
    loa::reference::class_by_code(code)
        .map(|c| c.name)
        .unwrap_or(code)
}

/// Print a team roster table followed by its score breakdown
pub fn print_team(team: &Team) {
    println!(
        "{:<5} {:<20} {:<11} {:<11} {:<9} {}",
        "Slot", "Champion", "Class", "Rarity", "Tier", "Healer"
    );
    println!("{}", "-".repeat(66));

    for (slot, member) in team.members.iter().enumerate() {
        println!(
            "{:<5} {:<20} {:<11} {:<11} {:<9} {}",
            slot,
            member.champion.name,
            class_display(&member.champion.class),
            member.champion.base_rarity,
            if member.star_tier.is_empty() {
                "-"
            } else {
                &member.star_tier
            },
            if member.champion.is_healer { "yes" } else { "" },
        );
    }

    println!();
    print_breakdown(&team.breakdown);
}

/// Print the full score audit trail
pub fn print_breakdown(breakdown: &ScoreBreakdown) {
    println!("Score breakdown");
    println!(
        "  {:<30} {:>10.1}",
        "Base (individual scores)", breakdown.base
    );
    println!(
        "  {:<30} {:>10.1}",
        "Percentage synergy bonus", breakdown.percentage_bonus
    );
    println!(
        "  {:<30} {:>10.1}",
        "Flat synergy bonus", breakdown.base_flat_bonus
    );
    println!(
        "  {:<30} {:>10.1}",
        "Cohesion bonus", breakdown.cohesion_bonus
    );
    println!(
        "  {:<30} {:>10.1}",
        "Subtotal after synergies", breakdown.subtotal_after_synergies
    );
    if breakdown.diversity_applied {
        println!(
            "  {:<30} {:>10.1}",
            format!("Class diversity ({} classes)", breakdown.distinct_classes),
            breakdown.diversity_bonus
        );
    }
    println!("  {:<30} {:>10.1}", "Total", breakdown.total);

    if !breakdown.active_synergies.is_empty() {
        println!();
        println!("Active synergies");
        for synergy in &breakdown.active_synergies {
            let kind = format!("{}", synergy.kind);
            println!(
                "  {:<20} {:<11} {} members   bonus {:>8.1}   cohesion {:>6.1}",
                synergy.name, kind, synergy.members, synergy.bonus, synergy.cohesion_bonus
            );
        }
    }
}
