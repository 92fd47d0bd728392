use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{ChartConfig, SolarDate, TargetDate, to_bazi_params};
use ziwei_calendar::{AstronomicalOracle, Gender};
use ziwei_chart::{ZiweiEngine, assemble_chart};

fn chart_bench(c: &mut Criterion) {
    let engine = ZiweiEngine::default();
    let params = to_bazi_params(
        &AstronomicalOracle::new(),
        SolarDate::new(1990, 5, 15, 14),
        Gender::Male,
        &ChartConfig::default(),
    )
    .expect("valid birth");

    let mut group = c.benchmark_group("chart");
    group.bench_function("generate_chart", |b| {
        b.iter(|| engine.generate_chart(black_box(1990), 5, 15, 14, Gender::Male))
    });
    group.bench_function("assemble_chart", |b| {
        b.iter(|| assemble_chart(black_box(params.clone())))
    });
    group.finish();
}

fn periods_bench(c: &mut Criterion) {
    let engine = ZiweiEngine::default();
    let chart = engine
        .generate_chart(1990, 5, 15, 14, Gender::Male)
        .expect("valid birth");
    let target = TargetDate::new(2024, 6, 1);
    c.bench_function("compute_time_periods", |b| {
        b.iter(|| engine.compute_time_periods(black_box(&chart), black_box(target)))
    });
}

criterion_group!(benches, chart_bench, periods_bench);
criterion_main!(benches);
