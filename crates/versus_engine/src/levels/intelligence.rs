//! Intelligence ladder, from Mindless up to Omniscient.

use super::level_enum;

level_enum! {
    /// Intelligence level, weakest first.
    IntelligenceLevel, INTELLIGENCE_LOOKUP {
        Mindless => "Mindless",
        Instinctive => "Instinctive",
        Animalistic => "Animalistic",
        BelowAverage => "Below Average",
        Average => "Average",
        AboveAverage => "Above Average",
        Gifted => "Gifted",
        Genius => "Genius",
        ExtraordinaryGenius => "Extraordinary Genius",
        Supergenius => "Supergenius",
        NighOmniscient => "Nigh-Omniscient",
        Omniscient => "Omniscient",
    }
}
