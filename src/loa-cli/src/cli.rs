//! CLI argument definitions for loa
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loa")]
#[command(about = "Legends of Astra team optimizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the roster for the highest-scoring team
    #[command(visible_alias = "o")]
    Optimize {
        /// Path to roster file (uses configured default if not provided)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Path to synergy rulebook file (built-in rulebook if not provided)
        #[arg(short, long)]
        synergies: Option<PathBuf>,

        /// Only consider teams anchored on a healer
        #[arg(long)]
        require_healer: bool,

        /// Champion id to leave out of the search (repeatable)
        #[arg(short = 'x', long = "exclude")]
        exclude: Vec<String>,

        /// Log progress every N evaluated teams (0 disables)
        #[arg(long, default_value_t = 50_000)]
        progress_every: u64,

        /// Write the found team to a file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Score a saved team or five entry ids given directly
    #[command(visible_alias = "s")]
    Score {
        /// Path to roster file (uses configured default if not provided)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Path to synergy rulebook file (built-in rulebook if not provided)
        #[arg(short, long)]
        synergies: Option<PathBuf>,

        /// Path to a saved team file
        #[arg(short, long)]
        team: Option<PathBuf>,

        /// Entry ids in slot order (exactly five)
        #[arg(conflicts_with = "team", num_args = 5)]
        members: Vec<String>,
    },

    /// Swap one member of a saved team and re-score
    #[command(visible_alias = "w")]
    Swap {
        /// Path to roster file (uses configured default if not provided)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Path to synergy rulebook file (built-in rulebook if not provided)
        #[arg(short, long)]
        synergies: Option<PathBuf>,

        /// Path to the saved team file
        #[arg(short, long)]
        team: PathBuf,

        /// Team slot to replace (0-4)
        #[arg(long)]
        slot: usize,

        /// Entry id of the replacement
        #[arg(long = "with")]
        with_entry: String,

        /// Write the edited team back to the team file
        #[arg(long)]
        save: bool,
    },

    /// Show one champion's score breakdown
    #[command(visible_alias = "p")]
    Champion {
        /// Path to roster file (uses configured default if not provided)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Entry id to inspect
        entry_id: String,
    },

    /// Validate the roster and list entries by score
    #[command(visible_alias = "l")]
    Roster {
        /// Path to roster file (uses configured default if not provided)
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default roster file
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Set the default synergy rulebook file
        #[arg(long)]
        synergies: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
