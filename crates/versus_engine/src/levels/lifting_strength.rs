//! Lifting Strength ladder, from Inapplicable through the weight classes
//! (Class 1 .. Class Y) up to Immeasurable.

use super::level_enum;

level_enum! {
    /// Lifting Strength level, weakest first.
    LiftingStrengthLevel, LIFTING_STRENGTH_LOOKUP {
        Inapplicable => "Inapplicable",
        BelowAverageHuman => "Below Average Human",
        AverageHuman => "Average Human",
        AboveAverageHuman => "Above Average Human",
        AthleticHuman => "Athletic Human",
        PeakHuman => "Peak Human",
        Superhuman => "Superhuman",
        Class1 => "Class 1",
        Class5 => "Class 5",
        Class10 => "Class 10",
        Class25 => "Class 25",
        Class50 => "Class 50",
        Class100 => "Class 100",
        ClassK => "Class K",
        ClassM => "Class M",
        ClassG => "Class G",
        ClassT => "Class T",
        ClassP => "Class P",
        ClassE => "Class E",
        ClassZ => "Class Z",
        ClassY => "Class Y",
        PreStellar => "Pre-Stellar",
        Stellar => "Stellar",
        MultiStellar => "Multi-Stellar",
        Galactic => "Galactic",
        MultiGalactic => "Multi-Galactic",
        Universal => "Universal",
        Infinite => "Infinite",
        Immeasurable => "Immeasurable",
    }
}
