//! Benchmarks for scoring and effect application.
//!
//! Run with:
//!   cargo bench --package versus_engine --bench scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use versus_engine::{
    apply_effects, total_score, SimpleEffect, StatAxis, StatEffect, StatTiers, TargetType,
};

/// A representative effect batch: a few buffs across different axes plus a
/// tagged one that negation can touch.
fn setup_effects() -> Vec<StatEffect> {
    [
        (StatAxis::Speed, 2.0, None),
        (StatAxis::Speed, 5.0, None),
        (StatAxis::Durability, 3.0, Some("armor")),
        (StatAxis::AttackPotency, 1.0, None),
        (StatAxis::Stamina, -2.0, None),
    ]
    .into_iter()
    .map(|(axis, change, tag)| {
        StatEffect::Simple(SimpleEffect {
            axis,
            change,
            target: TargetType::Own,
            description: None,
            modifier: None,
            ability_tag: tag.map(str::to_string),
        })
    })
    .collect()
}

fn bench_total_score(c: &mut Criterion) {
    let tiers = StatTiers::default();
    c.bench_function("total_score", |b| {
        b.iter(|| total_score(black_box(&tiers)));
    });
}

fn bench_apply_effects(c: &mut Criterion) {
    let tiers = StatTiers::default();
    let effects = setup_effects();
    let no_tags = Default::default();
    let tags = [String::from("armor")].into_iter().collect();

    c.bench_function("apply_effects", |b| {
        b.iter(|| apply_effects(black_box(&tiers), black_box(&effects), &no_tags));
    });
    c.bench_function("apply_effects_negated", |b| {
        b.iter(|| apply_effects(black_box(&tiers), black_box(&effects), &tags));
    });
}

criterion_group!(benches, bench_total_score, bench_apply_effects);
criterion_main!(benches);
