//! `show` subcommand: dump one character's keys and stat blocks.

use anyhow::bail;
use clap::Args;
use versus_engine::CharacterStore;

use super::print_tiers;

#[derive(Args)]
pub struct ShowArgs {
    /// Character name (case-insensitive)
    pub name: String,
}

pub fn execute(store: &CharacterStore, args: ShowArgs) -> anyhow::Result<()> {
    let Some(character) = store.by_name(&args.name) else {
        bail!("no character named {:?}", args.name);
    };

    println!(
        "{} [{}, {}]",
        character.name,
        character.origin.display_name(),
        character.gender.label()
    );
    for key in &character.keys {
        println!();
        println!("Key: {}", key.name);
        if !key.classifications.is_empty() {
            let labels: Vec<&str> = key.classifications.iter().map(|c| c.label()).collect();
            println!("  Classifications: {}", labels.join(", "));
        }
        print_tiers(&key.stat_tiers);

        for power in &key.powers {
            println!("  Power: {} ({} effects)", power.name, power.stat_effects.len());
        }
        for item in &key.equipment {
            let state = if item.is_enabled() { "active" } else { "inactive" };
            println!(
                "  Equipment: {} ({} effects, {state})",
                item.name,
                item.stat_effects.len()
            );
        }
        for attack in &key.attacks {
            println!("  Attack: {} ({} effects)", attack.name, attack.stat_effects.len());
        }
        for resistance in &key.resistances {
            let tags: Vec<&str> = resistance.negates.iter().map(String::as_str).collect();
            println!("  Resistance: {} (negates: {})", resistance.name, tags.join(", "));
        }
    }
    Ok(())
}
