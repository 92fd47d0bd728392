use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_calendar::{
    AstronomicalOracle, CalendarOracle, Gender, LocalTime, day_number, lunar_date_for_day,
    solar_longitude_at,
};

fn solar_bench(c: &mut Criterion) {
    let jd = 2_460_000.5;
    let mut group = c.benchmark_group("solar");
    group.bench_function("solar_longitude_at", |b| {
        b.iter(|| solar_longitude_at(black_box(jd)))
    });
    group.finish();
}

fn lunisolar_bench(c: &mut Criterion) {
    let jdn = day_number(1990, 5, 15);
    let mut group = c.benchmark_group("lunisolar");
    group.bench_function("lunar_date_for_day", |b| {
        b.iter(|| lunar_date_for_day(black_box(jdn)))
    });
    group.finish();
}

fn oracle_bench(c: &mut Criterion) {
    let oracle = AstronomicalOracle::new();
    let instant = LocalTime::new(1990, 5, 15, 12, 0, 0.0);
    let mut group = c.benchmark_group("oracle");
    group.bench_function("read", |b| {
        b.iter(|| oracle.read(black_box(&instant), Gender::Female))
    });
    group.finish();
}

criterion_group!(benches, solar_bench, lunisolar_bench, oracle_bench);
criterion_main!(benches);
