//! Durability ladder.
//!
//! Durability measurements, values, and tiers are the same as the Attack
//! Potency levels; the type stays separate so an effect on one axis cannot
//! be applied to the other.

use super::level_enum;

level_enum! {
    /// Durability level, weakest first.
    DurabilityLevel, DURABILITY_LOOKUP {
        BelowAverageHuman => "Below Average Human",
        Human => "Human",
        Athlete => "Athlete",
        Street => "Street",
        Wall => "Wall",
        SmallBuilding => "Small Building",
        Building => "Building",
        LargeBuilding => "Large Building",
        CityBlock => "City Block",
        MultiCityBlock => "Multi-City Block",
        SmallTown => "Small Town",
        Town => "Town",
        LargeTown => "Large Town",
        SmallCity => "Small City",
        City => "City",
        Mountain => "Mountain",
        LargeMountain => "Large Mountain",
        Island => "Island",
        LargeIsland => "Large Island",
        SmallCountry => "Small Country",
        Country => "Country",
        LargeCountry => "Large Country",
        Continent => "Continent",
        MultiContinent => "Multi-Continent",
        Moon => "Moon",
        SmallPlanet => "Small Planet",
        Planet => "Planet",
        LargePlanet => "Large Planet",
        BrownDwarf => "Brown Dwarf",
        SmallStar => "Small Star",
        Star => "Star",
        LargeStar => "Large Star",
        SolarSystem => "Solar System",
        MultiSolarSystem => "Multi-Solar System",
        Galaxy => "Galaxy",
        MultiGalaxy => "Multi-Galaxy",
        Universe => "Universe",
    }
}
