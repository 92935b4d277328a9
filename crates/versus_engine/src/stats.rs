//! Stat values and the nine-axis stat block.

use serde::{Deserialize, Serialize};

use crate::levels::{
    AttackPotencyLevel, DurabilityLevel, IntelligenceLevel, Level, LiftingStrengthLevel,
    RangeLevel, SpeedLevel, StaminaLevel, StrikingStrengthLevel, TierLevel,
};
use crate::modifier::StatModifier;

/// One leveled stat: a point on an axis ladder plus an optional qualifier.
///
/// Documents may spell the level field either `level` or the legacy `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue<L: Level> {
    #[serde(alias = "value")]
    pub level: L,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<StatModifier>,
}

impl<L: Level> StatValue<L> {
    /// Stat at the given level with no modifier.
    pub fn new(level: L) -> Self {
        Self { level, modifier: None }
    }

    /// Stat at the given level with a modifier.
    pub fn with_modifier(level: L, modifier: StatModifier) -> Self {
        Self { level, modifier: Some(modifier) }
    }
}

/// Selector for one of the nine stat axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatAxis {
    Tier,
    AttackPotency,
    Speed,
    LiftingStrength,
    StrikingStrength,
    Durability,
    Intelligence,
    Range,
    Stamina,
}

impl StatAxis {
    /// All nine axes, in the canonical display order.
    pub const ALL: [Self; 9] = [
        Self::Tier,
        Self::AttackPotency,
        Self::Speed,
        Self::LiftingStrength,
        Self::StrikingStrength,
        Self::Durability,
        Self::Intelligence,
        Self::Range,
        Self::Stamina,
    ];

    /// Human-readable axis name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tier => "Tier",
            Self::AttackPotency => "Attack Potency",
            Self::Speed => "Speed",
            Self::LiftingStrength => "Lifting Strength",
            Self::StrikingStrength => "Striking Strength",
            Self::Durability => "Durability",
            Self::Intelligence => "Intelligence",
            Self::Range => "Range",
            Self::Stamina => "Stamina",
        }
    }
}

/// The full nine-axis stat block for one character key.
///
/// Always fully populated; mutated only through the effect engine, which
/// works on a copy. Field names follow the character document schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTiers {
    pub tier: StatValue<TierLevel>,
    pub attack_potency: StatValue<AttackPotencyLevel>,
    pub speed: StatValue<SpeedLevel>,
    pub lifting_strength: StatValue<LiftingStrengthLevel>,
    pub striking_strength: StatValue<StrikingStrengthLevel>,
    pub durability: StatValue<DurabilityLevel>,
    pub intelligence: StatValue<IntelligenceLevel>,
    pub range: StatValue<RangeLevel>,
    pub stamina: StatValue<StaminaLevel>,
}

impl StatTiers {
    /// Total score across all nine axes. See [`crate::scoring`].
    pub fn total_score(&self) -> i32 {
        crate::scoring::total_score(self)
    }
}

impl Default for StatTiers {
    /// The minimum stat block a freshly-created key starts from.
    ///
    /// Note the floors are per-axis domain minimums, not ordinal 0 across
    /// the board: the tier ladder starts keys at 10-C, below which only the
    /// hypoversal tiers sit.
    fn default() -> Self {
        Self {
            tier: StatValue::new(TierLevel::BelowAverageHuman),
            attack_potency: StatValue::new(AttackPotencyLevel::BelowAverageHuman),
            speed: StatValue::new(SpeedLevel::BelowAverageHuman),
            lifting_strength: StatValue::new(LiftingStrengthLevel::BelowAverageHuman),
            striking_strength: StatValue::new(StrikingStrengthLevel::BelowAverageHuman),
            durability: StatValue::new(DurabilityLevel::BelowAverageHuman),
            intelligence: StatValue::new(IntelligenceLevel::BelowAverage),
            range: StatValue::new(RangeLevel::BelowStandard),
            stamina: StatValue::new(StaminaLevel::BelowAverage),
        }
    }
}
