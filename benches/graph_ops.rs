use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wgraph::WeightedGraph;

fn build_ring(n: i64) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    for id in 0..n {
        g.add_node(id).unwrap();
    }
    for id in 0..n {
        g.connect(id, (id + 1) % n, id as f64).unwrap();
        g.connect(id, (id + 7) % n, 1.0).unwrap();
    }
    g
}

fn bench_connect(c: &mut Criterion) {
    c.bench_function("connect_ring_1k", |b| b.iter(|| black_box(build_ring(1_000))));
}

fn bench_lookup(c: &mut Criterion) {
    let g = build_ring(1_000);
    c.bench_function("get_edge_weight", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for id in 0..1_000 {
                sum += g.get_edge_weight(black_box(id), (id + 1) % 1_000).unwrap_or(0.0);
            }
            sum
        })
    });
}

fn bench_remove_node(c: &mut Criterion) {
    c.bench_function("remove_all_nodes_1k", |b| {
        b.iter_batched(
            || build_ring(1_000),
            |mut g| {
                for id in 0..1_000 {
                    g.remove_node(id);
                }
                g
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_connect, bench_lookup, bench_remove_node);
criterion_main!(benches);
