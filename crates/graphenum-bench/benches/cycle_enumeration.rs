//! Cycle enumeration benchmarks: exhaustive vs backtracking per size tier.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphenum_bench::{SizeTier, generate_graph};
use graphenum_core::{EnumerationConfig, Strategy, find_cycles};

fn bench_find_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_cycles");
    group.sample_size(10);

    for tier in SizeTier::ALL {
        let graph = generate_graph(&tier.config(42)).expect("valid graph");

        for strategy in [Strategy::Exhaustive, Strategy::Backtracking] {
            let config = EnumerationConfig::default().with_strategy(strategy);
            group.bench_function(BenchmarkId::new(strategy.as_str(), tier.label()), |b| {
                b.iter(|| find_cycles(&graph, &config).expect("within limits"));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_find_cycles);
criterion_main!(benches);
