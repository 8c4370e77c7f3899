//! Criterion benchmarks for lattice construction and replication.
//!
//! The lattice is a full binary tree, so each extra period doubles the work;
//! these groups make that scaling visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{OptionType, ReplicationParams};
use pricer_pricing::lattice::LatticeBuilder;
use pricer_pricing::replication::value_option;

fn params(periods: i64) -> ReplicationParams {
    ReplicationParams::builder()
        .spot(420.0)
        .strike(500.0)
        .shares_controlled(100.0)
        .up_factor(0.1)
        .down_factor(0.1)
        .periods(periods)
        .risk_free_rate(0.05)
        .option_type(OptionType::Call)
        .build()
        .unwrap()
}

/// Benchmark lattice construction only.
fn bench_lattice_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice_build");

    for periods in [4usize, 8, 12, 16] {
        let builder = LatticeBuilder::new(420.0, 0.1, 0.1, periods).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(periods), &builder, |b, builder| {
            b.iter(|| black_box(builder.build()));
        });
    }

    group.finish();
}

/// Benchmark the full build, payoff, and backward induction pipeline.
fn bench_full_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_valuation");

    for periods in [4i64, 8, 12, 16] {
        let params = params(periods);
        group.bench_with_input(BenchmarkId::from_parameter(periods), &params, |b, params| {
            b.iter(|| value_option(black_box(params)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lattice_build, bench_full_valuation);
criterion_main!(benches);
