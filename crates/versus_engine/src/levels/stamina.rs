//! Stamina ladder.

use super::level_enum;

level_enum! {
    /// Stamina level, weakest first.
    StaminaLevel, STAMINA_LOOKUP {
        Unknown => "Unknown",
        BelowAverage => "Below Average",
        Average => "Average",
        Athletic => "Athletic",
        PeakHuman => "Peak Human",
        Superhuman => "Superhuman",
        Infinite => "Infinite",
        Inapplicable => "Inapplicable",
    }
}
