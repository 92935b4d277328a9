//! The character data model: characters, keys (variants), and the ability
//! entities that produce stat effects and negation tags.
//!
//! All of these deserialize from hand-authored JSON documents. Parsing is
//! tolerant: unknown fields are ignored and every ability list defaults to
//! empty, so documents can grow without breaking older readers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::effects::StatEffect;
use crate::stats::StatTiers;

/// Source universe of a character, used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Origin {
    Marvel,
    Dc,
    Image,
    Other,
}

impl Origin {
    /// Display name of the origin.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Marvel => "Marvel Comics",
            Self::Dc => "DC Comics",
            Self::Image => "Image Comics",
            Self::Other => "Other",
        }
    }
}

/// Gender of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Indefinable,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Indefinable => "Indefinable",
        }
    }
}

/// Classification or trait tag for a character key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    HumanMutate,
    Scientist,
    FugitiveOnTheRun,
    Avenger,
    Defender,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HumanMutate => "Human Mutate",
            Self::Scientist => "Scientist",
            Self::FugitiveOnTheRun => "Fugitive on the run",
            Self::Avenger => "Avenger",
            Self::Defender => "Defender",
        }
    }
}

/// Anything that produces stat effects (powers, equipment, attacks).
pub trait EffectSource {
    fn stat_effects(&self) -> &[StatEffect];
}

/// Anything that suppresses opponent abilities by tag (equipment, attacks).
pub trait Disabler {
    fn disables(&self) -> &BTreeSet<String>;
}

/// An innate power of a character key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Power {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stat_effects: Vec<StatEffect>,
    #[serde(default)]
    pub disables: BTreeSet<String>,
}

impl EffectSource for Power {
    fn stat_effects(&self) -> &[StatEffect] {
        &self.stat_effects
    }
}

impl Disabler for Power {
    fn disables(&self) -> &BTreeSet<String> {
        &self.disables
    }
}

/// An equipment item carried by a character key.
///
/// Optional equipment can be toggled; standard equipment is always active.
/// Inactive equipment contributes neither effects nor disables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stat_effects: Vec<StatEffect>,
    #[serde(default)]
    pub is_optional: bool,
    /// Explicit enable state; absent means "active unless optional".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub disables: BTreeSet<String>,
}

impl Equipment {
    /// Whether this item currently contributes to battle.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(!self.is_optional)
    }
}

impl EffectSource for Equipment {
    fn stat_effects(&self) -> &[StatEffect] {
        &self.stat_effects
    }
}

impl Disabler for Equipment {
    fn disables(&self) -> &BTreeSet<String> {
        &self.disables
    }
}

/// An attack a character key can perform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stat_effects: Vec<StatEffect>,
    #[serde(default)]
    pub disables: BTreeSet<String>,
}

impl EffectSource for Attack {
    fn stat_effects(&self) -> &[StatEffect] {
        &self.stat_effects
    }
}

impl Disabler for Attack {
    fn disables(&self) -> &BTreeSet<String> {
        &self.disables
    }
}

/// A resistance held by a character key.
///
/// Resistances change no stats themselves; they cancel opponent effects by
/// matching ability tags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resistance {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub negates: BTreeSet<String>,
}

/// A named variant ("key") of a character, with its own independent stat
/// block and ability set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterKey {
    pub name: String,
    #[serde(default)]
    pub classifications: BTreeSet<Classification>,
    /// Opaque asset reference; never resolved by the engine.
    #[serde(default)]
    pub image_path: String,
    pub stat_tiers: StatTiers,
    #[serde(default)]
    pub powers: Vec<Power>,
    #[serde(default)]
    pub resistances: Vec<Resistance>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
}

impl CharacterKey {
    /// All effects this key brings into battle: powers, enabled equipment,
    /// and attacks, in that order. Order matters for tie-breaking.
    pub fn gathered_effects(&self) -> Vec<StatEffect> {
        let mut effects = Vec::new();
        for power in &self.powers {
            effects.extend_from_slice(power.stat_effects());
        }
        for item in self.equipment.iter().filter(|item| item.is_enabled()) {
            effects.extend_from_slice(item.stat_effects());
        }
        for attack in &self.attacks {
            effects.extend_from_slice(attack.stat_effects());
        }
        effects
    }

    /// Tags this key's resistances negate on the opponent.
    pub fn negation_tags(&self) -> BTreeSet<String> {
        self.resistances
            .iter()
            .flat_map(|r| r.negates.iter().cloned())
            .collect()
    }

    /// Tags this key's powers, enabled equipment, and attacks disable on the
    /// opponent.
    pub fn disable_tags(&self) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();
        for power in &self.powers {
            tags.extend(power.disables().iter().cloned());
        }
        for item in self.equipment.iter().filter(|item| item.is_enabled()) {
            tags.extend(item.disables().iter().cloned());
        }
        for attack in &self.attacks {
            tags.extend(attack.disables().iter().cloned());
        }
        tags
    }

    /// Everything this key cancels on the opponent: resistance negates plus
    /// ability disables.
    pub fn suppression_tags(&self) -> BTreeSet<String> {
        let mut tags = self.negation_tags();
        tags.extend(self.disable_tags());
        tags
    }
}

/// A character with one or more keys (variants). Keys are fully independent
/// stat blocks; only name, origin, and gender are shared.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCharacter {
    pub name: String,
    pub origin: Origin,
    pub gender: Gender,
    pub keys: Vec<CharacterKey>,
}

impl GameCharacter {
    /// Find a key by name, case-insensitively.
    pub fn key(&self, name: &str) -> Option<&CharacterKey> {
        self.keys.iter().find(|k| k.name.eq_ignore_ascii_case(name))
    }
}
