#![allow(unused)]
extern crate adjgraph;

use adjgraph::{Graph, VertexId};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Builds a layered DAG: every vertex links to the next `fan_out` vertices
///
/// Weights vary with the endpoints so shortest distances are not trivially the hop count.
fn layered_graph(vertex_count: usize, fan_out: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for from in 0..vertex_count {
        for to in (from + 1)..(from + 1 + fan_out).min(vertex_count) {
            let weight = ((from * 31 + to * 17) % 97) as i64;
            graph.add_edge(from, to, weight).unwrap();
        }
    }
    graph
}

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}

/// Benchmark the whole-graph traversals and topological labeling on growing graphs
fn bench_linear_algorithms(c: &mut Criterion) {
    init_logging();

    let mut group = c.benchmark_group("linear");
    for vertex_count in [1_000, 10_000, 100_000] {
        let graph = layered_graph(vertex_count, 4);
        group.throughput(Throughput::Elements(
            (graph.vertex_count() + graph.edge_count()) as u64,
        ));

        group.bench_with_input(BenchmarkId::new("dfs", vertex_count), &graph, |b, graph| {
            b.iter(|| black_box(graph.depth_first_search()));
        });
        group.bench_with_input(BenchmarkId::new("bfs", vertex_count), &graph, |b, graph| {
            b.iter(|| black_box(graph.breadth_first_search()));
        });
        group.bench_with_input(
            BenchmarkId::new("topological", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| black_box(graph.topological_labeling()));
            },
        );
    }
    group.finish();
}

/// Benchmark shortest distances, whose selection step is quadratic in the vertex count
fn bench_shortest_paths(c: &mut Criterion) {
    init_logging();

    let mut group = c.benchmark_group("shortest_paths");
    for vertex_count in [100, 1_000, 5_000] {
        let graph = layered_graph(vertex_count, 8);
        group.bench_with_input(
            BenchmarkId::from_parameter(vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| black_box(graph.shortest_paths(VertexId::new(0)).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_linear_algorithms, bench_shortest_paths);
criterion_main!(benches);
