//! Range ladder: how far a character's attacks or abilities efficiently
//! reach, from sub-melee distances out to higher-dimensional spaces.

use super::level_enum;

level_enum! {
    /// Range level, shortest reach first.
    RangeLevel, RANGE_LOOKUP {
        BelowStandard => "Below Standard Melee Range",
        Standard => "Standard Melee Range",
        Extended => "Extended Melee Range",
        SeveralMeters => "Several Meters",
        TensOfMeters => "Tens of Meters",
        HundredsOfMeters => "Hundreds of Meters",
        Kilometers => "Kilometers",
        TensOfKilometers => "Tens of Kilometers",
        HundredsOfKilometers => "Hundreds of Kilometers",
        ThousandsOfKilometers => "Thousands of Kilometers",
        Planetary => "Planetary",
        Stellar => "Stellar",
        Interplanetary => "Interplanetary",
        Interstellar => "Interstellar",
        Galactic => "Galactic",
        Intergalactic => "Intergalactic",
        Universal => "Universal",
        HighUniversal => "High Universal",
        UniversalPlus => "Universal+",
        Interdimensional => "Interdimensional",
        LowMultiversal => "Low Multiversal",
        Multiversal => "Multiversal",
        MultiversalPlus => "Multiversal+",
        Extradimensional => "Extradimensional",
        LowComplexMultiversal => "Low Complex Multiversal",
        ComplexMultiversal => "Complex Multiversal",
        HighComplexMultiversal => "High Complex Multiversal",
        Hyperversal => "Hyperversal",
        HighHyperversal => "High Hyperversal",
        LowOuterversal => "Low Outerversal",
        Outerversal => "Outerversal",
        OuterversalPlus => "Outerversal+",
        HighOuterversal => "High Outerversal",
        Boundless => "Boundless",
    }
}
