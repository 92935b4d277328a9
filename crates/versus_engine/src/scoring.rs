//! Stat scoring.
//!
//! The effective score of one stat is
//! `ordinal * BASE_MULTIPLIER + bonus + BASE_OFFSET`, where `bonus` is the
//! modifier's fixed bonus (or [`DEFAULT_BONUS`] when no modifier is set).
//! Levels are spaced [`BASE_MULTIPLIER`] points apart and the offset keeps
//! even the weakest stat above zero.
//!
//! Everything here is pure recomputation: a total is nine multiply-adds, so
//! there is no cache and nothing to invalidate when a stat block changes.

use crate::levels::Level;
use crate::stats::{StatTiers, StatValue};

/// Points between adjacent levels on any axis.
pub const BASE_MULTIPLIER: i32 = 5;

/// Flat offset added to every stat score.
pub const BASE_OFFSET: i32 = 1;

/// Bonus applied when a stat has no modifier.
pub const DEFAULT_BONUS: i32 = 2;

/// Effective score of a single stat.
#[inline]
pub fn score<L: Level>(stat: &StatValue<L>) -> i32 {
    let bonus = stat.modifier.map_or(DEFAULT_BONUS, |m| m.bonus_value());
    stat.level.ordinal() as i32 * BASE_MULTIPLIER + bonus + BASE_OFFSET
}

/// Total score of a stat block: the sum over all nine axes.
pub fn total_score(tiers: &StatTiers) -> i32 {
    score(&tiers.tier)
        + score(&tiers.attack_potency)
        + score(&tiers.speed)
        + score(&tiers.lifting_strength)
        + score(&tiers.striking_strength)
        + score(&tiers.durability)
        + score(&tiers.intelligence)
        + score(&tiers.range)
        + score(&tiers.stamina)
}
