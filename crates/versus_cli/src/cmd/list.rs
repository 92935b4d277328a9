//! `list` subcommand: print the loaded roster.

use anyhow::bail;
use clap::Args;
use versus_engine::{CharacterStore, Origin};

#[derive(Args)]
pub struct ListArgs {
    /// Only characters from this origin (marvel, dc, image, other)
    #[arg(long)]
    pub origin: Option<String>,

    /// Only characters whose name (or any key name) contains this text
    #[arg(long)]
    pub query: Option<String>,
}

fn parse_origin(name: &str) -> anyhow::Result<Origin> {
    match name.to_ascii_lowercase().as_str() {
        "marvel" => Ok(Origin::Marvel),
        "dc" => Ok(Origin::Dc),
        "image" => Ok(Origin::Image),
        "other" => Ok(Origin::Other),
        _ => bail!("unknown origin {name:?} (expected marvel, dc, image, or other)"),
    }
}

pub fn execute(store: &CharacterStore, args: ListArgs) -> anyhow::Result<()> {
    let origin = args.origin.as_deref().map(parse_origin).transpose()?;

    let mut characters: Vec<_> = match args.query.as_deref() {
        Some(query) => store.search(query),
        None => store.all().iter().collect(),
    };
    if let Some(origin) = origin {
        characters.retain(|c| c.origin == origin);
    }

    if characters.is_empty() {
        println!("No characters matched.");
        return Ok(());
    }

    for character in characters {
        println!(
            "{} [{}, {}]",
            character.name,
            character.origin.display_name(),
            character.gender.label()
        );
        for key in &character.keys {
            println!("  - {} (total {})", key.name, key.stat_tiers.total_score());
        }
    }
    Ok(())
}
