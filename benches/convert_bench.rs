use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nongli::{Date, almanac_for, month_grid, solar_to_lunar};

fn conversion_bench(c: &mut Criterion) {
    let date = Date::new(2024, 2, 10).unwrap();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(date)))
    });
    group.bench_function("almanac_for", |b| b.iter(|| almanac_for(black_box(date))));
    group.finish();
}

fn grid_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.bench_function("month_grid", |b| {
        b.iter(|| month_grid(black_box(2024), black_box(2)))
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, grid_bench);
criterion_main!(benches);
