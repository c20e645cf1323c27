use criterion::{black_box, criterion_group, criterion_main, Criterion};

use atmo76::{evaluate, evaluate_all, Field, UnitSystem};

fn bench_single_metric(c: &mut Criterion) {
    c.bench_function("single_metric_all_fields", |b| {
        b.iter(|| {
            black_box(evaluate_all(black_box(10_250.0), UnitSystem::Metric).unwrap());
        });
    });
}

fn bench_single_imperial(c: &mut Criterion) {
    c.bench_function("single_imperial_all_fields", |b| {
        b.iter(|| {
            black_box(evaluate_all(black_box(33_000.0), UnitSystem::Imperial).unwrap());
        });
    });
}

fn bench_single_field(c: &mut Criterion) {
    c.bench_function("single_metric_density_only", |b| {
        b.iter(|| {
            black_box(
                evaluate(black_box(10_250.0), UnitSystem::Metric, &[Field::Density]).unwrap(),
            );
        });
    });
}

fn bench_altitude_sweep(c: &mut Criterion) {
    // 1000 altitudes spanning the full table range
    let altitudes: Vec<f64> = (0..1000)
        .map(|i| -2_000.0 + i as f64 * (88_000.0 / 999.0))
        .collect();

    c.bench_function("sweep_1000_metric", |b| {
        b.iter(|| {
            for &altitude in &altitudes {
                black_box(evaluate_all(black_box(altitude), UnitSystem::Metric).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_single_metric,
    bench_single_imperial,
    bench_single_field,
    bench_altitude_sweep,
);
criterion_main!(benches);
