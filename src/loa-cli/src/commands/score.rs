//! Team re-display command handler
//!
//! Scores a previously saved team (or five entry ids given directly)
//! without running a search.

use anyhow::{bail, Result};
use std::path::Path;

use loa::{Team, TEAM_SIZE};

use crate::file_io;

pub fn handle(
    roster_path: Option<&Path>,
    synergies_path: Option<&Path>,
    team_path: Option<&Path>,
    member_ids: &[String],
) -> Result<()> {
    let roster_path = file_io::resolve_roster(roster_path)?;
    let roster = file_io::load_roster(&roster_path)?;
    let synergies_path = file_io::resolve_synergies(synergies_path)?;
    let rulebook = file_io::load_rulebook(synergies_path.as_deref())?;

    let ids: Vec<String> = if let Some(path) = team_path {
        file_io::load_team_file(path)?.members
    } else if !member_ids.is_empty() {
        member_ids.to_vec()
    } else {
        bail!("Pass --team FILE or list exactly {} entry ids", TEAM_SIZE);
    };

    let members = file_io::members_from_ids(&roster, &ids)?;
    let team = Team::new(members, &rulebook);

    super::print_team(&team);
    Ok(())
}
