pub mod battle;
pub mod list;
pub mod show;

use versus_engine::{score, Level, StatAxis, StatTiers, StatValue};

/// One printable stat line: axis name, level (with modifier), score.
fn stat_line<L: Level>(axis: StatAxis, stat: &StatValue<L>) -> String {
    let value = match stat.modifier {
        Some(m) => format!("{} ({})", stat.level.label(), m.symbol()),
        None => stat.level.label().to_string(),
    };
    format!("  {:<18} {:<42} {:>4}", axis.name(), value, score(stat))
}

/// Print a full stat block with its total.
pub fn print_tiers(tiers: &StatTiers) {
    println!("{}", stat_line(StatAxis::Tier, &tiers.tier));
    println!("{}", stat_line(StatAxis::AttackPotency, &tiers.attack_potency));
    println!("{}", stat_line(StatAxis::Speed, &tiers.speed));
    println!("{}", stat_line(StatAxis::LiftingStrength, &tiers.lifting_strength));
    println!("{}", stat_line(StatAxis::StrikingStrength, &tiers.striking_strength));
    println!("{}", stat_line(StatAxis::Durability, &tiers.durability));
    println!("{}", stat_line(StatAxis::Intelligence, &tiers.intelligence));
    println!("{}", stat_line(StatAxis::Range, &tiers.range));
    println!("{}", stat_line(StatAxis::Stamina, &tiers.stamina));
    println!("  {:<18} {:<42} {:>4}", "Total", "", tiers.total_score());
}
