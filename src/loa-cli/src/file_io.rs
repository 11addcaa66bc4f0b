//! Roster, rulebook and team file handling
//!
//! Files ending in `.yaml`/`.yml` are parsed as YAML, everything else as
//! JSON. Roster files are validated on load so every command starts from
//! a structurally sound snapshot.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use loa::{Roster, RosterEntry, SynergyDefinition, Team, TEAM_SIZE};

use crate::config::Config;

/// Saved team snapshot: member entry ids in slot order
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamFile {
    pub members: Vec<String>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}

/// Resolve the roster path from the CLI argument or the configured default
pub fn resolve_roster(provided: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = provided {
        return Ok(path.to_path_buf());
    }

    let config = Config::load()?;
    config.roster.context(
        "No roster file given. Pass --roster or run 'loa configure --roster PATH' to set a default.",
    )
}

/// Resolve the rulebook path from the CLI argument or the configured
/// default; `None` means use the built-in rulebook
pub fn resolve_synergies(provided: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = provided {
        return Ok(Some(path.to_path_buf()));
    }

    let config = Config::load()?;
    Ok(config.synergies)
}

/// Load and validate a roster snapshot
pub fn load_roster(path: &Path) -> Result<Roster> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster from {}", path.display()))?;

    let roster: Roster = if is_yaml(path) {
        serde_yaml::from_str(&contents).context("Failed to parse roster YAML")?
    } else {
        serde_json::from_str(&contents).context("Failed to parse roster JSON")?
    };

    roster.validate().context("Roster failed validation")?;
    Ok(roster)
}

/// Load a synergy rulebook, or the built-in one when no path is given
pub fn load_rulebook(path: Option<&Path>) -> Result<Vec<SynergyDefinition>> {
    let Some(path) = path else {
        return Ok(loa::reference::builtin_rulebook());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read synergy rulebook from {}", path.display()))?;

    if is_yaml(path) {
        serde_yaml::from_str(&contents).context("Failed to parse synergy rulebook YAML")
    } else {
        serde_json::from_str(&contents).context("Failed to parse synergy rulebook JSON")
    }
}

/// Load a saved team snapshot
pub fn load_team_file(path: &Path) -> Result<TeamFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team from {}", path.display()))?;

    if is_yaml(path) {
        serde_yaml::from_str(&contents).context("Failed to parse team YAML")
    } else {
        serde_json::from_str(&contents).context("Failed to parse team JSON")
    }
}

/// Write a team snapshot (entry ids only; scores are recomputed on load)
pub fn save_team_file(path: &Path, team: &Team) -> Result<()> {
    let snapshot = TeamFile {
        members: team.members.iter().map(|m| m.entry_id.clone()).collect(),
    };

    let contents = if is_yaml(path) {
        serde_yaml::to_string(&snapshot).context("Failed to serialize team")?
    } else {
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize team")?
    };

    fs::write(path, contents)
        .with_context(|| format!("Failed to write team to {}", path.display()))?;

    Ok(())
}

/// Look up team members by entry id, preserving slot order.
///
/// The ids must name five distinct roster entries; a snapshot that
/// repeats an entry id or fields the same champion twice is rejected.
pub fn members_from_ids(roster: &Roster, ids: &[String]) -> Result<Vec<RosterEntry>> {
    if ids.len() != TEAM_SIZE {
        bail!(
            "a team needs exactly {} members, got {}",
            TEAM_SIZE,
            ids.len()
        );
    }

    let mut seen_ids = HashSet::new();
    for id in ids {
        if !seen_ids.insert(id.as_str()) {
            bail!("entry id '{}' is listed more than once in the team", id);
        }
    }

    let members = ids
        .iter()
        .map(|id| {
            roster
                .entry(id)
                .cloned()
                .with_context(|| format!("entry id '{}' not found in roster", id))
        })
        .collect::<Result<Vec<RosterEntry>>>()?;

    let mut seen_champions = HashSet::new();
    for member in &members {
        if !seen_champions.insert(member.champion.id.as_str()) {
            bail!(
                "champion {} fills more than one team slot",
                member.champion.id
            );
        }
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_JSON: &str = r#"{
        "entries": [
            { "entry_id": "e1", "champion": { "id": "a", "name": "A", "base_rarity": "common" } },
            { "entry_id": "e2", "champion": { "id": "b", "name": "B", "base_rarity": "rare" } },
            { "entry_id": "e3", "champion": { "id": "c", "name": "C", "base_rarity": "epic" } },
            { "entry_id": "e4", "champion": { "id": "d", "name": "D", "base_rarity": "common" } },
            { "entry_id": "e5", "champion": { "id": "e", "name": "E", "base_rarity": "common" } }
        ]
    }"#;

    #[test]
    fn test_load_roster_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, ROSTER_JSON).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.entry("e3").unwrap().champion.base_rarity, "epic");
    }

    #[test]
    fn test_load_roster_yaml() {
        let yaml = "entries:\n  - entry_id: e1\n    champion:\n      id: a\n      name: A\n      base_rarity: common\n";
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.yaml");
        fs::write(&path, yaml).unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_load_roster_rejects_invalid() {
        let json = r#"{
            "entries": [
                { "entry_id": "e1", "champion": { "id": "a", "name": "A", "base_rarity": "common" } },
                { "entry_id": "e1", "champion": { "id": "b", "name": "B", "base_rarity": "common" } }
            ]
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        fs::write(&path, json).unwrap();

        assert!(load_roster(&path).is_err());
    }

    #[test]
    fn test_load_rulebook_falls_back_to_builtin() {
        let rulebook = load_rulebook(None).unwrap();
        assert!(!rulebook.is_empty());
    }

    #[test]
    fn test_load_rulebook_from_file() {
        let json = r#"[{ "name": "Pack Hunters", "kind": "percentage", "value": 10.0 }]"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synergies.json");
        fs::write(&path, json).unwrap();

        let rulebook = load_rulebook(Some(&path)).unwrap();
        assert_eq!(rulebook.len(), 1);
        assert_eq!(rulebook[0].name, "Pack Hunters");
    }

    #[test]
    fn test_team_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team.json");

        let roster = load_roster_from_fixture(&dir);
        let ids: Vec<String> = (1..=5).map(|i| format!("e{i}")).collect();
        let members = members_from_ids(&roster, &ids).unwrap();
        let team = Team::new(members, &[]);

        save_team_file(&path, &team).unwrap();
        let loaded = load_team_file(&path).unwrap();
        assert_eq!(loaded.members, ids);
    }

    #[test]
    fn test_members_from_ids_errors() {
        let dir = tempfile::tempdir().unwrap();
        let roster = load_roster_from_fixture(&dir);

        let too_few: Vec<String> = vec!["e1".to_string()];
        assert!(members_from_ids(&roster, &too_few).is_err());

        let missing: Vec<String> = ["e1", "e2", "e3", "e4", "nope"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = members_from_ids(&roster, &missing).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_members_from_ids_rejects_repeated_entry() {
        let dir = tempfile::tempdir().unwrap();
        let roster = load_roster_from_fixture(&dir);

        let repeated: Vec<String> = ["e1", "e1", "e2", "e3", "e4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = members_from_ids(&roster, &repeated).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_members_from_ids_rejects_duplicate_champion() {
        let dir = tempfile::tempdir().unwrap();
        let mut roster = load_roster_from_fixture(&dir);
        // a second copy of champion "a" under its own entry id
        let mut copy = roster.entries[0].clone();
        copy.entry_id = "e6".to_string();
        roster.entries.push(copy);

        let ids: Vec<String> = ["e1", "e6", "e2", "e3", "e4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = members_from_ids(&roster, &ids).unwrap_err();
        assert!(err.to_string().contains("more than one team slot"));
    }

    fn load_roster_from_fixture(dir: &tempfile::TempDir) -> Roster {
        let path = dir.path().join("fixture-roster.json");
        fs::write(&path, ROSTER_JSON).unwrap();
        load_roster(&path).unwrap()
    }
}
