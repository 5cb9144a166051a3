//! Criterion benchmarks for the full analytics pipeline.
//!
//! Uses a deterministic layered topology: `layers` rows of `width` vertices,
//! every vertex wired to the whole next layer, plus a cycle threaded through
//! each layer so the SCC stage has real contraction work to do.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use gridlock_core::Graph;
use gridlock_core::pipeline::analyze;

fn layered_graph(layers: usize, width: usize) -> Graph {
    let n = layers * width;
    let mut g = Graph::new(n, true);
    for layer in 0..layers {
        let base = layer * width;
        // Cycle within the layer.
        for i in 0..width {
            g.add_edge(base + i, base + (i + 1) % width, 1)
                .expect("in range");
        }
        // Full bipartite wiring to the next layer.
        if layer + 1 < layers {
            let next = base + width;
            for i in 0..width {
                for j in 0..width {
                    g.add_edge(base + i, next + j, ((i + j) % 7 + 1) as i64)
                        .expect("in range");
                }
            }
        }
    }
    g
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for (layers, width) in [(50, 10), (200, 20)] {
        let g = layered_graph(layers, width);
        group.bench_function(format!("analyze_{layers}x{width}"), |b| {
            b.iter(|| analyze(black_box(&g), 0).expect("valid source"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
