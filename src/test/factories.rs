//! Graph factories for unit tests

use crate::Graph;

/// Helper function to build a graph from `(from, to, weight)` triples
pub fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
    let mut graph = Graph::new(vertex_count);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight).unwrap();
    }
    graph
}

/// 0 -> 1 -> 2
pub fn create_linear_graph() -> Graph {
    graph_from_edges(3, &[(0, 1, 1), (1, 2, 1)])
}

/// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
pub fn create_diamond_graph() -> Graph {
    graph_from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])
}

/// 0 -> 1 -> 2 -> 0
pub fn create_cycle_graph() -> Graph {
    graph_from_edges(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)])
}

///       0
///      / \
///     1   2
///    / \   \
///   3   4   5
pub fn create_tree_graph() -> Graph {
    graph_from_edges(
        6,
        &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 5, 1)],
    )
}

/// 0 -> 1, 2 -> 3, 4 isolated
pub fn create_disconnected_graph() -> Graph {
    graph_from_edges(5, &[(0, 1, 1), (2, 3, 1)])
}

/// Weighted graph where the cheapest route to 3 takes the longest hop count
///
/// 0 -> 1 (1), 0 -> 2 (4), 1 -> 2 (2), 2 -> 3 (1)
pub fn create_weighted_graph() -> Graph {
    graph_from_edges(4, &[(0, 1, 1), (0, 2, 4), (1, 2, 2), (2, 3, 1)])
}
