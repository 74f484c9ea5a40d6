//! Shortest-path benchmarks: exhaustive vs backtracking per size tier.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphenum_bench::{SizeTier, generate_graph};
use graphenum_core::{EnumerationConfig, Strategy, Vertex, shortest_paths};

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for tier in SizeTier::ALL {
        let graph = generate_graph(&tier.config(42)).expect("valid graph");
        let vs = graph.vertices();
        // Endpoints at opposite sides of the ring.
        let endpoints: Vec<Vertex> = vec![vs[0].clone(), vs[vs.len() / 2].clone()];
        // Same endpoints with one extra anchor excluded from routing.
        let with_middle: Vec<Vertex> = vec![vs[0].clone(), vs[1].clone(), vs[vs.len() / 2].clone()];

        for strategy in [Strategy::Exhaustive, Strategy::Backtracking] {
            let config = EnumerationConfig::default().with_strategy(strategy);
            group.bench_function(
                BenchmarkId::new(format!("{}/two_anchors", strategy.as_str()), tier.label()),
                |b| b.iter(|| shortest_paths(&graph, &endpoints, &config).expect("works")),
            );
            group.bench_function(
                BenchmarkId::new(format!("{}/excluded", strategy.as_str()), tier.label()),
                |b| b.iter(|| shortest_paths(&graph, &with_middle, &config).expect("works")),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_paths);
criterion_main!(benches);
