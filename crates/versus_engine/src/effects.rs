//! Battle-time stat effects: negation filtering, best-effect selection, and
//! application onto a stat block.
//!
//! Effects come from powers, equipment, and attacks. Before application they
//! pass a negation filter (tags the opponent's resistances/disables cancel),
//! then the single strongest effect per axis moves that axis by a whole
//! number of ladder steps, clamped to the ladder bounds.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::levels::Level;
use crate::modifier::StatModifier;
use crate::stats::{StatAxis, StatTiers, StatValue};

/// Who an effect applies to.
///
/// Only `SELF`-targeted effects participate in battle resolution; enemy and
/// battlefield-wide targeting is declared in documents but needs a
/// multi-party context this engine does not model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    #[default]
    #[serde(rename = "SELF")]
    Own,
    #[serde(rename = "ENEMY")]
    Enemy,
    #[serde(rename = "GLOBAL")]
    Global,
}

/// A flat shift of one stat axis by a signed number of ladder steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleEffect {
    /// Axis this effect moves.
    #[serde(rename = "statType", alias = "axis")]
    pub axis: StatAxis,
    /// Signed level shift; fractional values are truncated to whole steps.
    pub change: f64,
    #[serde(default)]
    pub target: TargetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Modifier stamped onto the stat when this effect is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<StatModifier>,
    /// Links this effect to resistances/disables that can cancel it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_tag: Option<String>,
}

/// A stat-changing effect produced by a power, equipment item, or attack.
///
/// Currently the only variant is [`SimpleEffect`]; the enum is the extension
/// point for future effect kinds (percentage-based, conditional, ...). The
/// engine matches exhaustively, so adding a variant forces every dispatch
/// site to route it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatEffect {
    Simple(SimpleEffect),
}

impl StatEffect {
    /// Axis this effect moves.
    pub fn axis(&self) -> StatAxis {
        match self {
            Self::Simple(e) => e.axis,
        }
    }

    /// Signed level shift.
    pub fn change(&self) -> f64 {
        match self {
            Self::Simple(e) => e.change,
        }
    }

    /// Who the effect applies to.
    pub fn target(&self) -> TargetType {
        match self {
            Self::Simple(e) => e.target,
        }
    }

    /// Modifier stamped onto the stat on application.
    pub fn modifier(&self) -> Option<StatModifier> {
        match self {
            Self::Simple(e) => e.modifier,
        }
    }

    /// Negation tag, if the effect carries one.
    pub fn ability_tag(&self) -> Option<&str> {
        match self {
            Self::Simple(e) => e.ability_tag.as_deref(),
        }
    }
}

/// Drops every effect whose ability tag appears in `negation_tags`.
///
/// Untagged effects always survive. Idempotent; with no tags or no effects
/// this is just a copy of the input.
pub fn filter_negated(effects: &[StatEffect], negation_tags: &BTreeSet<String>) -> Vec<StatEffect> {
    if effects.is_empty() || negation_tags.is_empty() {
        return effects.to_vec();
    }
    effects
        .iter()
        .filter(|effect| {
            effect
                .ability_tag()
                .map_or(true, |tag| !negation_tags.contains(tag))
        })
        .cloned()
        .collect()
}

/// Picks the candidate with the greatest `change`.
///
/// Ties keep the first occurrence: a later candidate replaces the current
/// best only when strictly greater. (`Iterator::max_by` keeps the last
/// maximum, which would silently reverse that contract.)
fn best_candidate<'a>(candidates: &[&'a SimpleEffect]) -> Option<&'a SimpleEffect> {
    let mut best: Option<&'a SimpleEffect> = None;
    for effect in candidates.iter().copied() {
        let better = match best {
            Some(current) => effect.change.total_cmp(&current.change) == Ordering::Greater,
            None => true,
        };
        if better {
            best = Some(effect);
        }
    }
    best
}

/// Applies the strongest of `candidates` to one stat slot.
///
/// Candidates must already be filtered for this slot's axis, `SELF` target,
/// and negation. The shift is truncated to whole steps and the resulting
/// ordinal clamped to the axis ladder; the winning effect's modifier
/// replaces the slot's modifier, even when it is `None`. No candidates, no
/// change.
pub fn apply_best_effect<L: Level>(stat: &mut StatValue<L>, candidates: &[&SimpleEffect]) {
    let Some(best) = best_candidate(candidates) else {
        return;
    };
    let step = best.change as i64;
    let ordinal = (stat.level.ordinal() as i64 + step).clamp(0, L::COUNT as i64 - 1);
    if let Some(level) = L::from_ordinal(ordinal as usize) {
        stat.level = level;
    }
    stat.modifier = best.modifier;
}

/// Applies a batch of effects to a stat block and returns the result.
///
/// Negated effects are dropped first, then only `SELF`-targeted effects are
/// retained, grouped by axis, and the best effect per axis applied
/// independently. The input block is never touched, so the caller's
/// pre-battle baseline stays available for comparison.
pub fn apply_effects(
    tiers: &StatTiers,
    effects: &[StatEffect],
    negation_tags: &BTreeSet<String>,
) -> StatTiers {
    let mut out = tiers.clone();
    if effects.is_empty() {
        return out;
    }

    let surviving = filter_negated(effects, negation_tags);

    let mut by_axis: [Vec<&SimpleEffect>; 9] = Default::default();
    for effect in &surviving {
        match effect {
            StatEffect::Simple(simple) => {
                if simple.target != TargetType::Own {
                    continue;
                }
                by_axis[simple.axis as usize].push(simple);
            }
        }
    }

    apply_best_effect(&mut out.tier, &by_axis[StatAxis::Tier as usize]);
    apply_best_effect(&mut out.attack_potency, &by_axis[StatAxis::AttackPotency as usize]);
    apply_best_effect(&mut out.speed, &by_axis[StatAxis::Speed as usize]);
    apply_best_effect(&mut out.lifting_strength, &by_axis[StatAxis::LiftingStrength as usize]);
    apply_best_effect(&mut out.striking_strength, &by_axis[StatAxis::StrikingStrength as usize]);
    apply_best_effect(&mut out.durability, &by_axis[StatAxis::Durability as usize]);
    apply_best_effect(&mut out.intelligence, &by_axis[StatAxis::Intelligence as usize]);
    apply_best_effect(&mut out.range, &by_axis[StatAxis::Range as usize]);
    apply_best_effect(&mut out.stamina, &by_axis[StatAxis::Stamina as usize]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{Level, SpeedLevel, StaminaLevel};

    fn speed_effect(change: f64) -> StatEffect {
        StatEffect::Simple(SimpleEffect {
            axis: StatAxis::Speed,
            change,
            target: TargetType::Own,
            description: None,
            modifier: None,
            ability_tag: None,
        })
    }

    fn tagged(effect: StatEffect, tag: &str) -> StatEffect {
        match effect {
            StatEffect::Simple(mut e) => {
                e.ability_tag = Some(tag.to_string());
                StatEffect::Simple(e)
            }
        }
    }

    fn tags(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn negation_drops_tagged_effects_only() {
        let effects = vec![
            tagged(speed_effect(2.0), "fire"),
            speed_effect(1.0),
            tagged(speed_effect(3.0), "ice"),
        ];
        let kept = filter_negated(&effects, &tags(&["fire"]));
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| e.ability_tag() != Some("fire")));

        // No tags: everything survives untouched.
        assert_eq!(filter_negated(&effects, &BTreeSet::new()), effects);
    }

    #[test]
    fn negation_filter_is_idempotent() {
        let effects = vec![
            tagged(speed_effect(2.0), "fire"),
            speed_effect(1.0),
        ];
        let negation = tags(&["fire", "poison"]);
        let once = filter_negated(&effects, &negation);
        let twice = filter_negated(&once, &negation);
        assert_eq!(once, twice);
    }

    #[test]
    fn best_effect_wins_without_stacking() {
        let tiers = StatTiers::default();
        let base = tiers.speed.level.ordinal();
        let effects = vec![speed_effect(2.0), speed_effect(5.0)];
        let out = apply_effects(&tiers, &effects, &BTreeSet::new());
        // Moves by 5, not 2 and not 7.
        assert_eq!(out.speed.level.ordinal(), base + 5);
    }

    #[test]
    fn ties_keep_the_first_occurrence() {
        let first = SimpleEffect {
            axis: StatAxis::Speed,
            change: 3.0,
            target: TargetType::Own,
            description: None,
            modifier: Some(StatModifier::Plus),
            ability_tag: None,
        };
        let second = SimpleEffect {
            modifier: Some(StatModifier::Lower),
            ..first.clone()
        };
        let tiers = StatTiers::default();
        let out = apply_effects(
            &tiers,
            &[StatEffect::Simple(first), StatEffect::Simple(second)],
            &BTreeSet::new(),
        );
        assert_eq!(out.speed.modifier, Some(StatModifier::Plus));
    }

    #[test]
    fn change_is_truncated_to_whole_steps() {
        let tiers = StatTiers::default();
        let base = tiers.speed.level.ordinal();
        let out = apply_effects(&tiers, &[speed_effect(2.9)], &BTreeSet::new());
        assert_eq!(out.speed.level.ordinal(), base + 2);
        let out = apply_effects(&tiers, &[speed_effect(-1.7)], &BTreeSet::new());
        assert_eq!(out.speed.level.ordinal(), base - 1);
    }

    #[test]
    fn application_clamps_to_the_ladder() {
        let mut tiers = StatTiers::default();
        tiers.speed = StatValue::new(SpeedLevel::MassivelyFtlPlus);
        let out = apply_effects(&tiers, &[speed_effect(1000.0)], &BTreeSet::new());
        assert_eq!(out.speed.level, SpeedLevel::MassivelyFtlPlus);

        tiers.speed = StatValue::new(SpeedLevel::Immobile);
        let out = apply_effects(&tiers, &[speed_effect(-1000.0)], &BTreeSet::new());
        assert_eq!(out.speed.level, SpeedLevel::Immobile);
    }

    #[test]
    fn winning_effect_replaces_the_modifier() {
        let mut tiers = StatTiers::default();
        tiers.speed = StatValue::with_modifier(SpeedLevel::Superhuman, StatModifier::AtLeast);
        // The winning effect carries no modifier, so the slot's is cleared.
        let out = apply_effects(&tiers, &[speed_effect(1.0)], &BTreeSet::new());
        assert_eq!(out.speed.modifier, None);

        let boosted = StatEffect::Simple(SimpleEffect {
            axis: StatAxis::Speed,
            change: 1.0,
            target: TargetType::Own,
            description: None,
            modifier: Some(StatModifier::Plus),
            ability_tag: None,
        });
        let out = apply_effects(&tiers, &[boosted], &BTreeSet::new());
        assert_eq!(out.speed.modifier, Some(StatModifier::Plus));
    }

    #[test]
    fn non_self_targets_are_ignored() {
        let tiers = StatTiers::default();
        let enemy = StatEffect::Simple(SimpleEffect {
            axis: StatAxis::Speed,
            change: 4.0,
            target: TargetType::Enemy,
            description: None,
            modifier: None,
            ability_tag: None,
        });
        let global = StatEffect::Simple(SimpleEffect {
            axis: StatAxis::Speed,
            change: 4.0,
            target: TargetType::Global,
            description: None,
            modifier: None,
            ability_tag: None,
        });
        let out = apply_effects(&tiers, &[enemy, global], &BTreeSet::new());
        assert_eq!(out, tiers);
    }

    #[test]
    fn negated_effects_never_apply() {
        let tiers = StatTiers::default();
        let base = tiers.speed.level.ordinal();
        let effects = vec![tagged(speed_effect(5.0), "fire"), speed_effect(2.0)];

        let out = apply_effects(&tiers, &effects, &tags(&["fire"]));
        assert_eq!(out.speed.level.ordinal(), base + 2);

        let out = apply_effects(&tiers, &effects, &BTreeSet::new());
        assert_eq!(out.speed.level.ordinal(), base + 5);
    }

    #[test]
    fn input_block_is_left_untouched() {
        let tiers = StatTiers::default();
        let snapshot = tiers.clone();
        let _ = apply_effects(&tiers, &[speed_effect(5.0)], &BTreeSet::new());
        assert_eq!(tiers, snapshot);
    }

    #[test]
    fn axes_apply_independently() {
        let tiers = StatTiers::default();
        let stamina_up = StatEffect::Simple(SimpleEffect {
            axis: StatAxis::Stamina,
            change: 2.0,
            target: TargetType::Own,
            description: None,
            modifier: None,
            ability_tag: None,
        });
        let out = apply_effects(&tiers, &[speed_effect(1.0), stamina_up], &BTreeSet::new());
        assert_eq!(out.speed.level.ordinal(), tiers.speed.level.ordinal() + 1);
        assert_eq!(out.stamina.level, StaminaLevel::from_ordinal(3).unwrap());
        // Untouched axes stay put.
        assert_eq!(out.tier, tiers.tier);
        assert_eq!(out.durability, tiers.durability);
    }

    #[test]
    fn effect_documents_parse() {
        let effect: StatEffect = serde_json::from_str(
            r#"{
                "statType": "SPEED",
                "change": 2.0,
                "target": "SELF",
                "modifier": "PLUS",
                "abilityTag": "gamma",
                "unknownField": true
            }"#,
        )
        .unwrap();
        assert_eq!(effect.axis(), StatAxis::Speed);
        assert_eq!(effect.change(), 2.0);
        assert_eq!(effect.target(), TargetType::Own);
        assert_eq!(effect.modifier(), Some(StatModifier::Plus));
        assert_eq!(effect.ability_tag(), Some("gamma"));

        // Target defaults to SELF when omitted.
        let effect: StatEffect =
            serde_json::from_str(r#"{"statType": "TIER", "change": -1}"#).unwrap();
        assert_eq!(effect.target(), TargetType::Own);
        assert_eq!(effect.axis(), StatAxis::Tier);
    }
}
