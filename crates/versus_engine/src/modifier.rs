//! Qualitative stat modifiers and their fixed score bonuses.

use serde::{Deserialize, Serialize};

/// Additional qualifier that nuances a stat value ("at least Wall level",
/// "9-B+", "likely Town level").
///
/// Each modifier carries a fixed bonus added on top of the level's base
/// score. The bonuses are constants of the scoring system, never derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatModifier {
    Plus,
    AtLeast,
    AtMost,
    Likely,
    Possibly,
    Higher,
    Lower,
    Varies,
}

impl StatModifier {
    /// Fixed bonus points this modifier adds to a stat's score.
    pub const fn bonus_value(self) -> i32 {
        match self {
            Self::Lower => 0,
            Self::AtMost => 1,
            Self::AtLeast | Self::Possibly | Self::Higher | Self::Varies => 2,
            Self::Likely => 3,
            Self::Plus => 4,
        }
    }

    /// Display symbol, as written next to a level ("Wall+", "at least Wall").
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::AtLeast => "at least",
            Self::AtMost => "at most",
            Self::Likely => "likely",
            Self::Possibly => "possibly",
            Self::Higher => "higher",
            Self::Lower => "lower",
            Self::Varies => "varies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_values_are_fixed() {
        assert_eq!(StatModifier::Plus.bonus_value(), 4);
        assert_eq!(StatModifier::Likely.bonus_value(), 3);
        assert_eq!(StatModifier::AtLeast.bonus_value(), 2);
        assert_eq!(StatModifier::Possibly.bonus_value(), 2);
        assert_eq!(StatModifier::Higher.bonus_value(), 2);
        assert_eq!(StatModifier::Varies.bonus_value(), 2);
        assert_eq!(StatModifier::AtMost.bonus_value(), 1);
        assert_eq!(StatModifier::Lower.bonus_value(), 0);
    }

    #[test]
    fn wire_format_is_constant_name() {
        let json = serde_json::to_string(&StatModifier::AtLeast).unwrap();
        assert_eq!(json, "\"AT_LEAST\"");
        let back: StatModifier = serde_json::from_str("\"PLUS\"").unwrap();
        assert_eq!(back, StatModifier::Plus);
    }
}
