//! Speed ladder: movement or reaction speed, from Immobile up through
//! thousands of times light speed.

use super::level_enum;

level_enum! {
    /// Speed level, weakest first.
    SpeedLevel, SPEED_LOOKUP {
        Immobile => "Immobile",
        BelowAverageHuman => "Below Average Human",
        AverageHuman => "Average Human",
        AthleticHuman => "Athletic Human",
        PeakHuman => "Peak Human",
        Superhuman => "Superhuman",
        Subsonic => "Subsonic (Faster than the Eye)",
        SubsonicPlus => "Subsonic+",
        Transonic => "Transonic",
        Supersonic => "Supersonic",
        SupersonicPlus => "Supersonic+",
        Hypersonic => "Hypersonic",
        HypersonicPlus => "Hypersonic+",
        HighHypersonic => "High Hypersonic",
        HighHypersonicPlus => "High Hypersonic+",
        MassivelyHypersonic => "Massively Hypersonic",
        MassivelyHypersonicPlus => "Massively Hypersonic+",
        SubRelativistic => "Sub-Relativistic",
        SubRelativisticPlus => "Sub-Relativistic+",
        Relativistic => "Relativistic",
        RelativisticPlus => "Relativistic+",
        SpeedOfLight => "Speed of Light",
        Ftl => "FTL",
        FtlPlus => "FTL+",
        MassivelyFtl => "Massively FTL",
        MassivelyFtlPlus => "Massively FTL+",
    }
}
