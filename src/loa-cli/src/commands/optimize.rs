//! Team search command handler

use anyhow::{Context, Result};
use std::path::Path;

use loa::{find_best_team_with_progress, SearchConstraints};

use crate::file_io;

pub fn handle(
    roster_path: Option<&Path>,
    synergies_path: Option<&Path>,
    require_healer: bool,
    exclude: &[String],
    progress_every: u64,
    save: Option<&Path>,
) -> Result<()> {
    let roster_path = file_io::resolve_roster(roster_path)?;
    let roster = file_io::load_roster(&roster_path)?;
    let synergies_path = file_io::resolve_synergies(synergies_path)?;
    let rulebook = file_io::load_rulebook(synergies_path.as_deref())?;

    let constraints = SearchConstraints {
        require_healer,
        exclude: exclude.iter().cloned().collect(),
    };

    let team = find_best_team_with_progress(
        &roster,
        &rulebook,
        &constraints,
        progress_every,
        |progress| {
            tracing::info!(
                "evaluated {}/{} teams, best so far {:.1}",
                progress.evaluated,
                progress.total,
                progress.best_score
            );
        },
    )
    .context("Search failed")?;

    println!("Best team found\n");
    super::print_team(&team);

    if let Some(path) = save {
        file_io::save_team_file(path, &team)?;
        println!();
        println!("Team saved to {}", path.display());
    }

    Ok(())
}
