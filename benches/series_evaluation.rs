use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geovsop::{
    ephemeris::{
        heliocentric::{Evaluation, SeriesEphemeris, ZeroEphemeris},
        planets::{Planet, PlanetEphemeris},
        Ephemeris,
    },
    geocentric::{GeocentricParams, GeocentricTransformer},
    metadata::Epoch,
    ref_system::Axis,
    vsop87::{
        series::{evaluate, evaluate_sequential},
        table::{CoefficientTable, Term, POWERS},
    },
};

const JT: f64 = 0.2202737850787132;

/// Synthetic table with the size profile of a VSOP87A body: long low powers, short high ones.
fn synthetic_table(terms_at_power_zero: usize) -> CoefficientTable {
    let mut table = CoefficientTable::new();
    for axis in Axis::ALL {
        for power in 0..POWERS {
            let count = (terms_at_power_zero >> power).max(1);
            let terms = (0..count)
                .map(|i| {
                    let i = i as f64;
                    Term::new(1.0 / (1.0 + i), 0.1 * i, 6283.07585 * (1.0 + i) / 3.0)
                })
                .collect();
            table
                .set_series(axis, power, terms)
                .expect("power below POWERS");
        }
    }
    table
}

fn bench_parallel_vs_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_evaluation");
    for size in [100usize, 1_000, 5_000] {
        let table = synthetic_table(size);
        group.bench_with_input(BenchmarkId::new("parallel", size), &table, |b, table| {
            b.iter(|| evaluate(black_box(table), black_box(JT)))
        });
        group.bench_with_input(BenchmarkId::new("sequential", size), &table, |b, table| {
            b.iter(|| evaluate_sequential(black_box(table), black_box(JT)))
        });
    }
    group.finish();
}

fn bench_series_ephemeris(c: &mut Criterion) {
    let table = Arc::new(synthetic_table(1_000));
    let parallel = SeriesEphemeris::new(table.clone());
    let sequential = SeriesEphemeris::new(table).with_evaluation(Evaluation::Sequential);

    c.bench_function("series_ephemeris/velocity_parallel", |b| {
        b.iter(|| parallel.velocity(black_box(JT)))
    });
    c.bench_function("series_ephemeris/velocity_sequential", |b| {
        b.iter(|| sequential.velocity(black_box(JT)))
    });
}

fn bench_geocentric(c: &mut Criterion) {
    let params = GeocentricParams::builder()
        .observation_epoch(JT)
        .build()
        .unwrap();
    let earth: Arc<dyn Ephemeris> = Arc::new(PlanetEphemeris::new(Planet::Earth));
    let transformer = GeocentricTransformer::from_params(earth, &params).unwrap();

    let mut group = c.benchmark_group("geocentric");
    for epoch in [Epoch::J2000, Epoch::Apparent] {
        let sun = transformer.transform(Arc::new(ZeroEphemeris), epoch).unwrap();
        let mars = transformer
            .transform(Arc::new(PlanetEphemeris::new(Planet::Mars)), epoch)
            .unwrap();
        group.bench_function(format!("sun/{epoch}"), |b| {
            b.iter(|| sun.position(black_box(JT)))
        });
        group.bench_function(format!("mars/{epoch}"), |b| {
            b.iter(|| mars.position(black_box(JT)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parallel_vs_sequential,
    bench_series_ephemeris,
    bench_geocentric
);
criterion_main!(benches);
