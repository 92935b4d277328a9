//! Character roster browser and battle resolver.
//!
//! Loads a directory of character JSON documents and drives the engine from
//! the command line.
//!
//! Usage:
//!   cargo run -p versus_cli -- list
//!   cargo run -p versus_cli -- show Hulk
//!   cargo run -p versus_cli -- battle Hulk Flash --left-key "Savage Hulk" --apply-effects

mod cmd;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use versus_engine::CharacterStore;

#[derive(Parser)]
#[command(name = "versus_cli")]
struct Cli {
    /// Directory of character JSON documents
    #[arg(long, global = true, default_value = "assets/characters")]
    characters: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loaded characters and their keys
    List(cmd::list::ListArgs),

    /// Show one character's keys, stats, and abilities
    Show(cmd::show::ShowArgs),

    /// Resolve a battle between two character keys
    Battle(cmd::battle::BattleArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = CharacterStore::load(&cli.characters)
        .with_context(|| format!("loading characters from {}", cli.characters.display()))?;

    match cli.command {
        Commands::List(args) => cmd::list::execute(&store, args),
        Commands::Show(args) => cmd::show::execute(&store, args),
        Commands::Battle(args) => cmd::battle::execute(&store, args),
    }
}
