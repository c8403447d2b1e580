// Throughput benchmarks for the alpha pipeline
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kalpha_core::{compute_alpha, CoincidenceMatrix, RatingTable, VariableType};
use rand::prelude::*;
use rand::rngs::StdRng;

fn generate_random_table(raters: usize, items: usize, levels: i32) -> RatingTable {
    let mut rng = StdRng::seed_from_u64(42);
    let rows: Vec<Vec<Option<i32>>> = (0..raters)
        .map(|_| {
            (0..items)
                .map(|_| {
                    if rng.random_bool(0.9) {
                        Some(rng.random_range(1..=levels))
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();
    RatingTable::from_rows(rows).unwrap()
}

fn benchmark_coincidence(c: &mut Criterion) {
    let mut group = c.benchmark_group("coincidence");

    for items in [100, 1000, 10000].iter() {
        let table = generate_random_table(5, *items, 7);
        group.bench_with_input(BenchmarkId::new("items", items), &table, |b, table| {
            b.iter(|| {
                black_box(CoincidenceMatrix::from_table(black_box(table)));
            });
        });
    }

    group.finish();
}

fn benchmark_alpha(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha");

    let table = generate_random_table(10, 5000, 5);
    for vt in [VariableType::Interval, VariableType::Nominal] {
        group.bench_function(vt.as_str(), |b| {
            b.iter(|| {
                black_box(compute_alpha(black_box(&table), vt).unwrap());
            });
        });
    }

    group.finish();
}

fn benchmark_wide_universe(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_universe");

    for levels in [10, 100, 500].iter() {
        let table = generate_random_table(4, 2000, *levels);
        group.bench_with_input(BenchmarkId::new("levels", levels), &table, |b, table| {
            b.iter(|| {
                black_box(compute_alpha(black_box(table), VariableType::Interval).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_coincidence, benchmark_alpha, benchmark_wide_universe);
criterion_main!(benches);
