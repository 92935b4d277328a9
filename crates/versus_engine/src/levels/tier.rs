//! The overall Tier ladder.
//!
//! Tiers carry two strings: the short label used in documents and match-ups
//! ("10-C") and a long description ("Below Average Human level"). Ranking
//! runs from the hypoversal tiers up through Boundless.

use super::level_enum;

level_enum! {
    /// Overall power tier, weakest first.
    TierLevel, TIER_LOOKUP {
        // Tier 11
        LowHypoverse => "11-C",
        Hypoverse => "11-B",
        HighHypoverse => "11-A",
        // Tier 10
        BelowAverageHuman => "10-C",
        Human => "10-B",
        Athlete => "10-A",
        // Tier 9
        Street => "9-C",
        Wall => "9-B",
        SmallBuilding => "9-A",
        // Tier 8
        Building => "8-C",
        LargeBuilding => "High 8-C",
        CityBlock => "8-B",
        MultiCityBlock => "8-A",
        // Tier 7
        SmallTown => "Low 7-C",
        Town => "7-C",
        LargeTown => "High 7-C",
        SmallCity => "Low 7-B",
        City => "7-B",
        Mountain => "7-A",
        LargeMountain => "High 7-A",
        // Tier 6
        Island => "6-C",
        LargeIsland => "High 6-C",
        SmallCountry => "Low 6-B",
        Country => "6-B",
        LargeCountry => "High 6-B",
        Continent => "6-A",
        MultiContinent => "High 6-A",
        // Tier 5
        Moon => "5-C",
        SmallPlanet => "Low 5-B",
        Planet => "5-B",
        LargePlanet => "5-A",
        BrownDwarf => "High 5-A",
        // Tier 4
        SmallStar => "Low 4-C",
        Star => "4-C",
        LargeStar => "High 4-C",
        SolarSystem => "4-B",
        MultiSolarSystem => "4-A",
        // Tier 3
        Galaxy => "3-C",
        MultiGalaxy => "3-B",
        Universe => "3-A",
        HighUniverse => "High 3-A",
        // Tier 2
        UniversePlus => "Low 2-C",
        LowMultiverse => "2-C",
        Multiverse => "2-B",
        MultiversePlus => "2-A",
        // Tier 1
        LowComplexMultiverse => "Low 1-C",
        ComplexMultiverse => "1-C",
        HighComplexMultiverse => "High 1-C",
        Hyperverse => "1-B",
        HighHyperverse => "High 1-B",
        LowOuterverse => "Low 1-A",
        Outerverse => "1-A",
        HighOuterverse => "High 1-A",
        // Boundless
        Boundless => "0",
    }
}

impl TierLevel {
    /// Long-form description of the tier.
    pub fn description(self) -> &'static str {
        match self {
            Self::LowHypoverse => "Low Hypoverse level",
            Self::Hypoverse => "Hypoverse level",
            Self::HighHypoverse => "High Hypoverse level",
            Self::BelowAverageHuman => "Below Average Human level",
            Self::Human => "Human level",
            Self::Athlete => "Athlete level",
            Self::Street => "Street level",
            Self::Wall => "Wall level",
            Self::SmallBuilding => "Small Building level",
            Self::Building => "Building level",
            Self::LargeBuilding => "Large Building level",
            Self::CityBlock => "City Block level",
            Self::MultiCityBlock => "Multi-City Block level",
            Self::SmallTown => "Small Town level",
            Self::Town => "Town level",
            Self::LargeTown => "Large Town level",
            Self::SmallCity => "Small City level",
            Self::City => "City level",
            Self::Mountain => "Mountain level",
            Self::LargeMountain => "Large Mountain level",
            Self::Island => "Island level",
            Self::LargeIsland => "Large Island level",
            Self::SmallCountry => "Small Country level",
            Self::Country => "Country level",
            Self::LargeCountry => "Large Country level",
            Self::Continent => "Continent level",
            Self::MultiContinent => "Multi-Continent level",
            Self::Moon => "Moon level",
            Self::SmallPlanet => "Small Planet level",
            Self::Planet => "Planet level",
            Self::LargePlanet => "Large Planet level",
            Self::BrownDwarf => "Brown Dwarf level",
            Self::SmallStar => "Small Star level",
            Self::Star => "Star level",
            Self::LargeStar => "Large Star level",
            Self::SolarSystem => "Solar System level",
            Self::MultiSolarSystem => "Multi-Solar System level",
            Self::Galaxy => "Galaxy level",
            Self::MultiGalaxy => "Multi-Galaxy level",
            Self::Universe => "Universe level",
            Self::HighUniverse => "High Universe level",
            Self::UniversePlus => "Universe level+",
            Self::LowMultiverse => "Low Multiverse level",
            Self::Multiverse => "Multiverse level",
            Self::MultiversePlus => "Multiverse level+",
            Self::LowComplexMultiverse => "Low Complex Multiverse level",
            Self::ComplexMultiverse => "Complex Multiverse level",
            Self::HighComplexMultiverse => "High Complex Multiverse level",
            Self::Hyperverse => "Hyperverse level",
            Self::HighHyperverse => "High Hyperverse level",
            Self::LowOuterverse => "Low Outerverse level",
            Self::Outerverse => "Outerverse level",
            Self::HighOuterverse => "High Outerverse level",
            Self::Boundless => "Boundless",
        }
    }
}
