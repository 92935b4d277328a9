//! Striking Strength ladder: the force behind a character's blows, including
//! the higher-dimensional scales above conventional physical ranges.

use super::level_enum;

level_enum! {
    /// Striking Strength level, weakest first.
    StrikingStrengthLevel, STRIKING_STRENGTH_LOOKUP {
        LowHypoverse => "Low Hypoverse level",
        Hypoverse => "Hypoverse level",
        HighHypoverse => "High Hypoverse level",
        BelowAverageHuman => "Below Average Human level",
        Human => "Human level",
        Athlete => "Athlete level",
        Street => "Street level",
        Wall => "Wall level",
        SmallBuilding => "Small Building level",
        Building => "Building level",
        LargeBuilding => "Large Building level",
        CityBlock => "City Block level",
        MultiCityBlock => "Multi-City Block level",
        SmallTown => "Small Town level",
        Town => "Town level",
        LargeTown => "Large Town level",
        SmallCity => "Small City level",
        City => "City level",
        Mountain => "Mountain level",
        LargeMountain => "Large Mountain level",
        Island => "Island level",
        LargeIsland => "Large Island level",
        SmallCountry => "Small Country level",
        Country => "Country level",
        LargeCountry => "Large Country level",
        Continent => "Continent level",
        MultiContinent => "Multi-Continent level",
        Moon => "Moon level",
        SmallPlanet => "Small Planet level",
        Planet => "Planet level",
        LargePlanet => "Large Planet level",
        BrownDwarf => "Brown Dwarf level",
        SmallStar => "Small Star level",
        Star => "Star level",
        LargeStar => "Large Star level",
        SolarSystem => "Solar System level",
        MultiSolarSystem => "Multi-Solar System level",
        Galaxy => "Galaxy level",
        MultiGalaxy => "Multi-Galaxy level",
        Universe => "Universe level",
        HighUniverse => "High Universe level",
        UniversePlus => "Universe level+",
        LowMultiverse => "Low Multiverse level",
        Multiverse => "Multiverse level",
        MultiversePlus => "Multiverse level+",
        LowComplexMultiverse => "Low Complex Multiverse level",
        ComplexMultiverse => "Complex Multiverse level",
        HighComplexMultiverse => "High Complex Multiverse level",
        Hyperverse => "Hyperverse level",
        HighHyperverse => "High Hyperverse level",
        LowOuterverse => "Low Outerverse level",
        Outerverse => "Outerverse level",
        OuterversePlus => "Outerverse level+",
        HighOuterverse => "High Outerverse level",
        Inapplicable => "Inapplicable",
    }
}
