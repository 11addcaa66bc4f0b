mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loa=info,loa_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            roster,
            synergies,
            require_healer,
            exclude,
            progress_every,
            save,
        } => {
            commands::optimize::handle(
                roster.as_deref(),
                synergies.as_deref(),
                require_healer,
                &exclude,
                progress_every,
                save.as_deref(),
            )?;
        }

        Commands::Score {
            roster,
            synergies,
            team,
            members,
        } => {
            commands::score::handle(
                roster.as_deref(),
                synergies.as_deref(),
                team.as_deref(),
                &members,
            )?;
        }

        Commands::Swap {
            roster,
            synergies,
            team,
            slot,
            with_entry,
            save,
        } => {
            commands::swap::handle(
                roster.as_deref(),
                synergies.as_deref(),
                &team,
                slot,
                &with_entry,
                save,
            )?;
        }

        Commands::Champion { roster, entry_id } => {
            commands::champion::handle(roster.as_deref(), &entry_id)?;
        }

        Commands::Roster { roster } => {
            commands::roster::handle(roster.as_deref())?;
        }

        Commands::Configure {
            roster,
            synergies,
            show,
        } => {
            commands::configure::handle(roster, synergies, show)?;
        }
    }

    Ok(())
}
