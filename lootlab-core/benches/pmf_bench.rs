//! Criterion benchmarks for LootLab hot paths.
//!
//! Benchmarks:
//! 1. Binomial PMF — recurrence path (small n) vs log-space path (large n)
//! 2. Full table report assembly

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lootlab_core::{binomial_pmf, Entry, LootTable, SamplingMode, TableReport};

fn make_table(entries: usize) -> LootTable {
    LootTable::new(
        (0..entries)
            .map(|i| Entry::Weighted {
                name: format!("item_{i}"),
                weight: (i % 7 + 1) as f64,
            })
            .collect(),
    )
    .unwrap()
}

fn bench_pmf(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_pmf");
    for &n in &[10u32, 100, 500, 2_000, 20_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| binomial_pmf(black_box(0.3), black_box(n)).unwrap());
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let table = make_table(100);
    c.bench_function("table_report_100_entries_20_draws", |b| {
        b.iter(|| {
            TableReport::compute(
                black_box(&table),
                black_box(20),
                SamplingMode::WithReplacement,
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_pmf, bench_report);
criterion_main!(benches);
