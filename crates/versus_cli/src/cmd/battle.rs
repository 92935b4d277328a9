//! `battle` subcommand: resolve a match-up between two character keys.

use anyhow::bail;
use clap::Args;
use versus_engine::{resolve, resolve_with_effects, BattleOutcome, CharacterStore};

use super::print_tiers;

#[derive(Args)]
pub struct BattleArgs {
    /// Left character name
    pub left: String,

    /// Right character name
    pub right: String,

    /// Key to use for the left character (defaults to its first key)
    #[arg(long)]
    pub left_key: Option<String>,

    /// Key to use for the right character (defaults to its first key)
    #[arg(long)]
    pub right_key: Option<String>,

    /// Apply each side's battle effects (negated by the opponent) before scoring
    #[arg(long)]
    pub apply_effects: bool,
}

pub fn execute(store: &CharacterStore, args: BattleArgs) -> anyhow::Result<()> {
    let Some((left_character, left_key)) = store.select(&args.left, args.left_key.as_deref())
    else {
        bail!("left selection not found: {:?}", args.left);
    };
    let Some((right_character, right_key)) = store.select(&args.right, args.right_key.as_deref())
    else {
        bail!("right selection not found: {:?}", args.right);
    };

    println!("{} ({})", left_character.name, left_key.name);
    print_tiers(&left_key.stat_tiers);
    println!();
    println!("{} ({})", right_character.name, right_key.name);
    print_tiers(&right_key.stat_tiers);
    println!();

    let outcome = if args.apply_effects {
        resolve_with_effects(left_key, right_key)
    } else {
        resolve(left_key, right_key)
    };

    match outcome {
        BattleOutcome::Victory { winner, winner_score, loser, loser_score } => {
            println!("Winner: {} ({winner_score} vs {loser_score} for {})", winner.name, loser.name);
        }
        BattleOutcome::Draw { left_score, .. } => {
            println!("Draw at {left_score} points.");
        }
    }
    Ok(())
}
