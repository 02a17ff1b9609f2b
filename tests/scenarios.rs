//! Integration tests for the public graph API.
//!
//! Covers the reference scenarios for every algorithm and checks the structural guarantees
//! (spanning forests, minimal distances, label ordering) on a family of generated graphs.

use std::collections::BTreeMap;

use adjgraph::{algorithms, prelude::*};

fn v(index: usize) -> VertexId {
    VertexId::new(index)
}

fn build(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<Graph> {
    let mut graph = Graph::new(vertex_count);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

/// Deterministic pseudo-random graphs, including self-loops, parallel edges and cycles
fn generated_graphs() -> Vec<Graph> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move |bound: u64| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % bound
    };

    (0..40)
        .map(|round| {
            let vertex_count = 1 + (round % 12);
            let edge_count = next(3 * vertex_count as u64 + 1);
            let mut graph = Graph::new(vertex_count);
            for _ in 0..edge_count {
                let from = next(vertex_count as u64) as usize;
                let to = next(vertex_count as u64) as usize;
                let weight = next(20) as i64;
                graph.add_edge(from, to, weight).unwrap();
            }
            graph
        })
        .collect()
}

/// Bellman-Ford style fixpoint used as the reference for minimal path weights
fn reference_distances(graph: &Graph, start: VertexId, unit_weights: bool) -> Vec<Option<u64>> {
    let mut distances = vec![None; graph.vertex_count()];
    distances[start.index()] = Some(0);

    for _ in 0..graph.vertex_count() {
        for vertex in graph.vertices() {
            let Some(base) = distances[vertex.index().index()] else {
                continue;
            };
            for edge in vertex.adjacency() {
                let weight = if unit_weights { 1 } else { edge.weight() };
                let candidate = base + weight;
                let slot = &mut distances[edge.destination().index()];
                if slot.map_or(true, |current| candidate < current) {
                    *slot = Some(candidate);
                }
            }
        }
    }
    distances
}

#[test]
fn shortest_distances_weighted_scenario() -> Result<()> {
    let graph = build(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (2, 3, 1)])?;

    let distances = graph.shortest_distances(0)?;

    let expected: BTreeMap<VertexId, Distance> = [
        (v(1), Distance::Finite(1)),
        (v(2), Distance::Finite(3)),
        (v(3), Distance::Finite(4)),
    ]
    .into_iter()
    .collect();
    assert_eq!(distances, expected);
    Ok(())
}

#[test]
fn breadth_first_predecessors_scenario() -> Result<()> {
    let graph = build(4, &[(0, 1, 1), (0, 2, 1), (1, 2, 1), (2, 3, 1)])?;

    let forest = graph.breadth_first_search();

    assert_eq!(forest.predecessor(v(0)), Some(v(0)));
    assert_eq!(forest.predecessor(v(1)), Some(v(0)));
    assert_eq!(forest.predecessor(v(2)), Some(v(0)));
    assert_eq!(forest.predecessor(v(3)), Some(v(2)));
    Ok(())
}

#[test]
fn topological_labels_scenario() -> Result<()> {
    let graph = build(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])?;
    let in_degrees: Vec<usize> = graph.vertices().iter().map(Vertex::in_degree).collect();
    assert_eq!(in_degrees, vec![0, 1, 1, 2]);

    let labeling = graph.topological_labeling();

    assert_eq!(labeling.labels(), &[Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(labeling.order(), &[v(0), v(1), v(2), v(3)]);
    Ok(())
}

#[test]
fn unreachable_scenario() -> Result<()> {
    let graph = build(3, &[(0, 1, 1)])?;

    let distances = graph.shortest_distances(0)?;

    assert_eq!(distances.len(), 2);
    assert_eq!(distances[&v(1)], Distance::Finite(1));
    assert_eq!(distances[&v(2)], Distance::Unreachable);
    assert_eq!(distances[&v(2)].value(), Distance::SENTINEL);
    Ok(())
}

#[test]
fn free_functions_match_graph_methods() -> Result<()> {
    let graph = build(5, &[(0, 3, 2), (3, 1, 2), (1, 4, 7), (2, 2, 1)])?;

    assert_eq!(
        algorithms::depth_first_search(&graph),
        graph.depth_first_search()
    );
    assert_eq!(
        algorithms::breadth_first_search(&graph),
        graph.breadth_first_search()
    );
    assert_eq!(
        algorithms::shortest_paths(&graph, v(0))?,
        graph.shortest_paths(0)?
    );
    assert_eq!(
        algorithms::topological_labeling(&graph),
        graph.topological_labeling()
    );
    Ok(())
}

#[test]
fn errors_leave_graph_untouched() -> Result<()> {
    let mut graph = build(3, &[(0, 1, 1)])?;
    let before = graph.clone();

    assert_eq!(
        graph.add_edge(3, 0, 1),
        Err(Error::IndexOutOfRange {
            index: 3,
            vertex_count: 3
        })
    );
    assert_eq!(
        graph.add_edge(1, 2, -5),
        Err(Error::InvalidEdgeWeight {
            from: 1,
            to: 2,
            weight: -5
        })
    );
    assert!(graph.add_undirected_edge(2, 7, 1).is_err());
    assert!(graph.shortest_distances(3).is_err());
    assert!(graph.vertex(3).is_err());

    assert_eq!(graph, before);
    Ok(())
}

#[test]
fn empty_graph_is_a_valid_base_case() -> Result<()> {
    let graph = Graph::new(0);

    assert!(graph.depth_first_search().order().is_empty());
    assert!(graph.breadth_first_search().order().is_empty());
    assert!(graph.shortest_distances(0)?.is_empty());
    assert!(graph.topological_labeling().is_complete());
    Ok(())
}

#[test]
fn algorithms_do_not_interfere() -> Result<()> {
    let graph = build(4, &[(0, 1, 3), (1, 2, 3), (2, 0, 3), (2, 3, 1)])?;

    let first = graph.depth_first_search();
    let labeling = graph.topological_labeling();
    let paths = graph.shortest_paths(1)?;
    let second = graph.depth_first_search();

    assert_eq!(first, second);
    assert!(!labeling.is_complete());
    assert_eq!(paths.distance(v(3)), Some(Distance::Finite(4)));
    Ok(())
}

#[test]
fn traversals_span_every_vertex() {
    for graph in generated_graphs() {
        for forest in [graph.depth_first_search(), graph.breadth_first_search()] {
            assert_eq!(forest.order().len(), graph.vertex_count());

            for vertex in graph.vertex_ids() {
                assert!(forest.is_visited(vertex));

                // Following predecessors terminates at a root within n steps
                let path = forest.path_from_root(vertex).unwrap();
                assert!(path.len() <= graph.vertex_count());
                assert!(forest.is_root(path[0]));

                // Every tree edge is a real edge of the graph
                for pair in path.windows(2) {
                    assert!(graph.contains_edge(pair[0], pair[1]).unwrap());
                }
            }
        }
    }
}

#[test]
fn breadth_first_depth_is_minimum_hop_count() {
    for graph in generated_graphs() {
        let forest = graph.breadth_first_search();
        for &root in forest.roots() {
            let hops = reference_distances(&graph, root, true);
            for vertex in graph.vertex_ids() {
                let path = forest.path_from_root(vertex).unwrap();
                if path[0] == root {
                    assert_eq!(
                        forest.depth(vertex).map(|depth| depth as u64),
                        hops[vertex.index()]
                    );
                }
            }
        }
    }
}

#[test]
fn shortest_distances_are_minimal() {
    for graph in generated_graphs() {
        for start in graph.vertex_ids() {
            let expected = reference_distances(&graph, start, false);
            let paths = graph.shortest_paths(start).unwrap();

            for vertex in graph.vertex_ids() {
                assert_eq!(
                    paths.distance(vertex),
                    Some(Distance::from(expected[vertex.index()]))
                );

                // Reconstructed paths realise the reported distance
                if let Some(path) = paths.path_to(vertex) {
                    let total: PathWeight = path
                        .windows(2)
                        .map(|pair| PathWeight::from(graph.edge_weight(pair[0], pair[1]).unwrap().unwrap()))
                        .sum();
                    assert_eq!(Distance::Finite(total), paths.distance(vertex).unwrap());
                }
            }
        }
    }
}

#[test]
fn topological_labels_respect_edges() {
    for graph in generated_graphs() {
        let labeling = graph.topological_labeling();

        for vertex in graph.vertices() {
            for edge in vertex.adjacency() {
                match (
                    labeling.label(vertex.index()),
                    labeling.label(edge.destination()),
                ) {
                    (Some(from), Some(to)) => assert!(from < to),
                    // Anything downstream of an unlabeled vertex is unlabeled too
                    (None, to) => assert_eq!(to, None),
                    (Some(_), None) => {}
                }
            }
        }

        let mut labels: Vec<usize> = labeling.labels().iter().flatten().copied().collect();
        labels.sort_unstable();
        assert_eq!(labels, (1..=labeling.order().len()).collect::<Vec<_>>());
    }
}

#[test]
fn undirected_edges_are_reciprocal() -> Result<()> {
    let mut graph = Graph::new(3);
    graph.add_undirected_edge(0, 1, 2)?;
    graph.add_undirected_edge(1, 2, 5)?;

    assert_eq!(graph.edge_count(), 4);
    let distances = graph.shortest_distances(2)?;
    assert_eq!(distances[&v(0)], Distance::Finite(7));

    let forest = graph.depth_first_search();
    assert_eq!(forest.roots(), &[v(0)]);
    Ok(())
}

#[test]
fn heavy_paths_stay_reachable() -> Result<()> {
    let heaviest = i64::MAX;
    let graph = build(
        5,
        &[(0, 1, heaviest), (1, 2, heaviest), (2, 3, heaviest), (3, 4, 0)],
    )?;

    let paths = graph.shortest_paths(0)?;
    let forest = graph.breadth_first_search();

    for vertex in graph.vertex_ids() {
        assert!(paths.is_reachable(vertex));
        assert_eq!(paths.path_to(vertex), forest.path_from_root(vertex));
    }
    assert_eq!(
        paths.distance(v(4)),
        Some(Distance::Finite(PathWeight::from(heaviest.unsigned_abs()) * 3))
    );
    Ok(())
}
