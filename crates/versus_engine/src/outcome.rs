//! Battle outcome resolution: score two keys, compare, declare a result.

use crate::character::CharacterKey;
use crate::effects::apply_effects;
use crate::scoring::total_score;

/// Result of a battle between two character keys.
///
/// Borrows the compared keys; scores are whatever totals the comparison ran
/// on (raw by default, post-effect for [`resolve_with_effects`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BattleOutcome<'a> {
    Victory {
        winner: &'a CharacterKey,
        winner_score: i32,
        loser: &'a CharacterKey,
        loser_score: i32,
    },
    Draw {
        left: &'a CharacterKey,
        left_score: i32,
        right: &'a CharacterKey,
        right_score: i32,
    },
}

impl<'a> BattleOutcome<'a> {
    fn from_scores(
        left: &'a CharacterKey,
        left_score: i32,
        right: &'a CharacterKey,
        right_score: i32,
    ) -> Self {
        if left_score > right_score {
            Self::Victory {
                winner: left,
                winner_score: left_score,
                loser: right,
                loser_score: right_score,
            }
        } else if right_score > left_score {
            Self::Victory {
                winner: right,
                winner_score: right_score,
                loser: left,
                loser_score: left_score,
            }
        } else {
            Self::Draw { left, left_score, right, right_score }
        }
    }

    /// The winning key, if the battle was not a draw.
    pub fn winner(&self) -> Option<&'a CharacterKey> {
        match self {
            Self::Victory { winner, .. } => Some(winner),
            Self::Draw { .. } => None,
        }
    }
}

/// Compares two keys on their current stat blocks, as loaded.
///
/// Pure: no mutation, no randomness. Callers wanting battle modifiers apply
/// effects first (or use [`resolve_with_effects`]).
pub fn resolve<'a>(left: &'a CharacterKey, right: &'a CharacterKey) -> BattleOutcome<'a> {
    BattleOutcome::from_scores(
        left,
        total_score(&left.stat_tiers),
        right,
        total_score(&right.stat_tiers),
    )
}

/// [`resolve`], but only when both sides are selected.
///
/// `None` means "not ready", the precondition-not-met state of a selection
/// screen with an empty slot.
pub fn try_resolve<'a>(
    left: Option<&'a CharacterKey>,
    right: Option<&'a CharacterKey>,
) -> Option<BattleOutcome<'a>> {
    match (left, right) {
        (Some(left), Some(right)) => Some(resolve(left, right)),
        _ => None,
    }
}

/// Compares two keys after applying each side's own battle effects.
///
/// Each side's gathered effects are filtered by the *opponent's* suppression
/// tags (resistance negates plus equipment/attack disables) and applied to a
/// snapshot of its stat block; the snapshots are scored and compared. The
/// keys themselves are never mutated, so pre-battle totals remain available
/// from the inputs.
pub fn resolve_with_effects<'a>(
    left: &'a CharacterKey,
    right: &'a CharacterKey,
) -> BattleOutcome<'a> {
    let left_negations = right.suppression_tags();
    let right_negations = left.suppression_tags();

    let left_tiers = apply_effects(&left.stat_tiers, &left.gathered_effects(), &left_negations);
    let right_tiers = apply_effects(&right.stat_tiers, &right.gathered_effects(), &right_negations);

    BattleOutcome::from_scores(left, total_score(&left_tiers), right, total_score(&right_tiers))
}
