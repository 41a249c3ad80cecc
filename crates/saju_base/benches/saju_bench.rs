use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ElementDistribution, ElementPercentages, FourPillars, HeavenlyStem, Pillar,
    advise_useful_elements, build_day_pillar, build_hour_pillar, build_month_pillar,
    evaluate_day_master, score_fortune,
};
use saju_calendar::{FixedTermCalendar, SolarDate};

fn sample_pillars() -> Option<FourPillars> {
    Some(FourPillars {
        year: Pillar::from_indices(6, 6)?,
        month: Pillar::from_indices(7, 5)?,
        day: Pillar::from_indices(6, 4)?,
        hour: Pillar::from_indices(9, 7)?,
    })
}

fn pillar_bench(c: &mut Criterion) {
    let cal = FixedTermCalendar::new();
    let date = SolarDate::new(1990, 5, 15);

    let mut group = c.benchmark_group("pillars");
    group.bench_function("hour_pillar", |b| {
        b.iter(|| build_hour_pillar(black_box(HeavenlyStem::Gyeong), black_box(13)))
    });
    group.bench_function("month_pillar_fixed_term", |b| {
        b.iter(|| build_month_pillar(&cal, black_box(date)))
    });
    group.bench_function("day_pillar_fixed_term", |b| {
        b.iter(|| build_day_pillar(&cal, black_box(date)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let Some(pillars) = sample_pillars() else {
        return;
    };
    let dist = ElementDistribution::from_pillars(&pillars);

    let mut group = c.benchmark_group("analysis");
    group.bench_function("distribution", |b| {
        b.iter(|| ElementDistribution::from_pillars(black_box(&pillars)))
    });
    group.bench_function("day_master", |b| {
        b.iter(|| evaluate_day_master(black_box(&pillars), black_box(&dist)))
    });
    group.bench_function("useful_elements", |b| {
        b.iter(|| advise_useful_elements(black_box(&dist)))
    });
    group.bench_function("fortune", |b| {
        b.iter(|| score_fortune(&ElementPercentages::from_distribution(black_box(&dist))))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, analysis_bench);
criterion_main!(benches);
