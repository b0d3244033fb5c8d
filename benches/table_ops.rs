//! benches/table_ops.rs
//! Run with:  cargo bench --bench table_ops
//! HTML:      target/criterion/report/index.html

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use stock_dashboard::{Row, Statistic, StockTable};

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const TABLE_SIZES: &[usize] = &[1_000, 10_000, 100_000];
const GROUPS: &[&str] = &["Tech", "Retail", "Auto", "Finance", "Energy"];

/// Build a fresh table with `n_rows` rows.
/// Symbols cycle over 1000 tickers; prices random 1–500; groups cycle.
fn setup_table(n_rows: usize) -> StockTable {
    let mut rng = StdRng::seed_from_u64(42);
    let mut table = StockTable::new();

    for i in 0..n_rows {
        let symbol = format!("SYM{}", i % 1_000);
        let price = rng.gen_range(1.0..500.0);
        let pe = rng.gen_range(-5.0..60.0);
        let group = GROUPS[i % GROUPS.len()];

        table.push_row(Row::new(symbol, price, pe, group));
    }

    table
}

pub fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_price");

    for &n in TABLE_SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let id = BenchmarkId::from_parameter(n);
        group.bench_function(id, |b| {
            b.iter_batched(
                || setup_table(n),
                |mut table| {
                    table.sort_by_price();
                    black_box(table);
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

pub fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_aggregate");

    for &n in TABLE_SIZES {
        group.throughput(Throughput::Elements(n as u64));
        let table = setup_table(n);

        for statistic in [Statistic::Mean, Statistic::Count] {
            let id = BenchmarkId::from_parameter(format!("rows_{}_{}", n, statistic.label()));
            group.bench_function(id, |b| {
                b.iter(|| {
                    let report = table.aggregate(black_box(statistic));
                    black_box(report);
                })
            });
        }
    }

    group.finish();
}

pub fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_symbol");

    for &n in TABLE_SIZES {
        group.throughput(Throughput::Elements(n as u64));

        // every 1000th row shares this ticker, so the retain walks the
        // whole table and drops n / 1000 matches
        let id = BenchmarkId::from_parameter(n);
        group.bench_function(id, |b| {
            b.iter_batched(
                || setup_table(n),
                |mut table| {
                    let removed = table.delete(black_box("SYM500"));
                    black_box(removed)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_aggregate, bench_delete);
criterion_main!(benches);
