//! versus_engine - tiered stat scoring and battle comparison engine
//!
//! This library models fictional characters as bundles of tiered power
//! statistics, scores them with a deterministic formula, applies battle-time
//! effects (buffs/debuffs with tag-based negation), and resolves a winner
//! between two character keys.
//!
//! The engine is pure and synchronous: no I/O happens outside the
//! [`loader`] module, and nothing here needs locking as long as no two
//! callers mutate the same data concurrently.

/// Ordered level catalogs for the nine stat axes
pub mod levels;

/// Qualitative stat modifiers and their bonuses
pub mod modifier;

/// Stat values and the nine-axis stat block
pub mod stats;

/// Score formula
pub mod scoring;

/// Effect application and negation
pub mod effects;

/// Characters, keys, and ability entities
pub mod character;

/// Battle outcome resolution
pub mod outcome;

/// Character document loading
pub mod loader;

// Re-export commonly used types
pub use character::{
    Attack, CharacterKey, Classification, Disabler, EffectSource, Equipment, GameCharacter,
    Gender, Origin, Power, Resistance,
};
pub use effects::{
    apply_best_effect, apply_effects, filter_negated, SimpleEffect, StatEffect, TargetType,
};
pub use levels::{
    AttackPotencyLevel, DurabilityLevel, IntelligenceLevel, Level, LiftingStrengthLevel,
    RangeLevel, SpeedLevel, StaminaLevel, StrikingStrengthLevel, TierLevel,
};
pub use loader::{load_characters, CharacterStore, LoaderError};
pub use modifier::StatModifier;
pub use outcome::{resolve, resolve_with_effects, try_resolve, BattleOutcome};
pub use scoring::{score, total_score, BASE_MULTIPLIER, BASE_OFFSET, DEFAULT_BONUS};
pub use stats::{StatAxis, StatTiers, StatValue};
