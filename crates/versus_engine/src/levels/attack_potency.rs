//! Attack Potency ladder: the destructive capacity behind a character's
//! attacks, from baseline human up to universal scale.

use super::level_enum;

level_enum! {
    /// Attack Potency level, weakest first.
    AttackPotencyLevel, ATTACK_POTENCY_LOOKUP {
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
