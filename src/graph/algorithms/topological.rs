//! Topological labeling for directed acyclic graphs (DAGs).
//!
//! This module provides Kahn's algorithm for assigning each vertex a rank `1..=n` such that
//! for every edge `(u, v)` the label of `u` is smaller than the label of `v`.
//!
//! Vertices that are ready at the same time are taken from a priority queue ordered by an
//! explicit [`TieBreak`](crate::TieBreak), so the labeling is fully deterministic.
//!
//! # Cyclic input
//!
//! A graph with a cycle has no topological order. Instead of failing, the labeling stops
//! once no vertex is ready: every vertex on a cycle, and every vertex downstream of one,
//! stays unlabeled. [`TopologicalLabeling::is_complete`] tells the two cases apart.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::{
    config::{AlgorithmConfig, TieBreak},
    graph::{InDegree, Successors, VertexId},
};

/// Topological labels assigned to the vertices of a graph.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, VertexId};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 3, 1)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let labeling = graph.topological_labeling();
/// assert!(labeling.is_complete());
/// assert_eq!(labeling.label(VertexId::new(0)), Some(1));
/// assert_eq!(labeling.label(VertexId::new(3)), Some(4));
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalLabeling {
    /// Label per vertex, `None` if the vertex was never ready
    labels: Vec<Option<usize>>,
    /// Labeled vertices in label order
    order: Vec<VertexId>,
}

impl TopologicalLabeling {
    /// Returns the label of `vertex`, or `None` if it was left unlabeled or is outside the
    /// graph.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> Option<usize> {
        self.labels.get(vertex.index()).copied().flatten()
    }

    /// Returns the label of `vertex`, or `-1` if it has none.
    #[must_use]
    pub fn label_or_unset(&self, vertex: VertexId) -> i64 {
        self.label(vertex)
            .and_then(|label| i64::try_from(label).ok())
            .unwrap_or(-1)
    }

    /// Returns the label of every vertex, indexed by vertex.
    #[must_use]
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Returns the labeled vertices sorted by label.
    ///
    /// For a DAG this is a topological order of the whole graph.
    #[must_use]
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Returns `true` if every vertex received a label.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.labels.len()
    }

    /// Returns the vertices that were left without a label.
    pub fn unlabeled(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| label.is_none())
            .map(|(index, _)| VertexId::new(index))
    }

    /// Returns the number of vertices covered by the labeling.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the labeling covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A vertex waiting in the ready queue.
///
/// `BinaryHeap` pops its greatest element, so the vertex the tie-break picks first compares
/// greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadyVertex {
    vertex: VertexId,
    tie_break: TieBreak,
}

impl Ord for ReadyVertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tie_break.compare(self.vertex, other.vertex).reverse()
    }
}

impl PartialOrd for ReadyVertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Assigns topological labels with the default configuration.
///
/// Simultaneously ready vertices are labeled in ascending index order.
///
/// # Arguments
///
/// * `graph` - The graph to label
///
/// # Returns
///
/// A [`TopologicalLabeling`] that is complete exactly when `graph` is acyclic.
pub fn topological_labeling<G>(graph: &G) -> TopologicalLabeling
where
    G: Successors + InDegree,
{
    topological_labeling_with_config(graph, &AlgorithmConfig::default())
}

/// Assigns topological labels using Kahn's algorithm.
///
/// # Algorithm
///
/// 1. Initialise a working count per vertex from its in-degree; all labels start unset
/// 2. Queue every vertex whose count is 0
/// 3. While the queue is not empty:
///    - Take the vertex preferred by `config.tie_break` and give it the next label,
///      starting at 1
///    - Decrement the count of the destination of each of its outgoing edges; a
///      destination whose count drops to exactly 0 joins the queue
/// 4. Vertices never queued keep no label
///
/// # Arguments
///
/// * `graph` - The graph to label
/// * `config` - Tie-break rule for vertices that are ready at the same time
///
/// # Returns
///
/// A [`TopologicalLabeling`] with labels `1..=k`, where `k` is the number of vertices not on
/// or downstream of a cycle.
///
/// Each vertex is queued at most once. A count that is already 0 is never decremented
/// further, so an in-degree that undercounts edges cannot queue a vertex twice.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V)
pub fn topological_labeling_with_config<G>(
    graph: &G,
    config: &AlgorithmConfig,
) -> TopologicalLabeling
where
    G: Successors + InDegree,
{
    let vertex_count = graph.vertex_count();
    let mut counts: Vec<usize> = graph
        .vertex_ids()
        .map(|vertex| graph.in_degree(vertex))
        .collect();
    let mut labels: Vec<Option<usize>> = vec![None; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);

    let ready = |vertex: VertexId| ReadyVertex {
        vertex,
        tie_break: config.tie_break,
    };
    let mut queue: BinaryHeap<ReadyVertex> = graph
        .vertex_ids()
        .filter(|vertex| counts[vertex.index()] == 0)
        .map(ready)
        .collect();

    while let Some(ReadyVertex { vertex, .. }) = queue.pop() {
        order.push(vertex);
        labels[vertex.index()] = Some(order.len());

        for successor in graph.successors(vertex) {
            let count = &mut counts[successor.index()];
            if *count == 0 {
                continue;
            }
            *count -= 1;
            if *count == 0 {
                queue.push(ready(successor));
            }
        }
    }

    if order.len() < vertex_count {
        log::debug!(
            "topological labeling left {} of {} vertices unlabeled",
            vertex_count - order.len(),
            vertex_count
        );
    }

    TopologicalLabeling { labels, order }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{AlgorithmConfig, TieBreak},
        graph::algorithms::topological::{topological_labeling, topological_labeling_with_config},
        test::factories::{create_cycle_graph, create_diamond_graph, graph_from_edges},
        Graph, VertexId,
    };

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn labels(graph: &Graph) -> Vec<Option<usize>> {
        topological_labeling(graph).labels().to_vec()
    }

    #[test]
    fn test_empty_graph() {
        let labeling = topological_labeling(&Graph::new(0));
        assert!(labeling.is_empty());
        assert!(labeling.is_complete());
    }

    #[test]
    fn test_isolated_vertices_in_index_order() {
        assert_eq!(labels(&Graph::new(3)), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_diamond() {
        assert_eq!(
            labels(&create_diamond_graph()),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_ready_order_is_by_index_not_discovery() {
        // 0 -> 3 and 0 -> 1 make 3 ready before 1, yet 1 is labeled first
        let graph = graph_from_edges(4, &[(0, 3, 1), (0, 1, 1), (2, 0, 1)]);
        let labeling = topological_labeling(&graph);
        assert_eq!(labeling.order(), &[v(2), v(0), v(1), v(3)]);
        assert_eq!(labeling.label(v(3)), Some(4));
    }

    #[test]
    fn test_highest_index_tie_break() {
        let config = AlgorithmConfig::default().with_tie_break(TieBreak::HighestIndex);
        let labeling = topological_labeling_with_config(&create_diamond_graph(), &config);
        assert_eq!(labeling.order(), &[v(0), v(2), v(1), v(3)]);
    }

    #[test]
    fn test_edges_respect_labels() {
        let graph = graph_from_edges(
            6,
            &[(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)],
        );
        let labeling = topological_labeling(&graph);
        assert!(labeling.is_complete());

        for vertex in graph.vertices() {
            for edge in vertex.adjacency() {
                assert!(labeling.label(vertex.index()) < labeling.label(edge.destination()));
            }
        }
    }

    #[test]
    fn test_cycle_leaves_everything_unlabeled() {
        let labeling = topological_labeling(&create_cycle_graph());
        assert!(!labeling.is_complete());
        assert!(labeling.order().is_empty());
        assert_eq!(labeling.unlabeled().count(), 3);
        assert_eq!(labeling.label_or_unset(v(0)), -1);
    }

    #[test]
    fn test_downstream_of_cycle_is_unlabeled() {
        // 0 -> 1 <-> 2 -> 3, plus independent 4
        let graph = graph_from_edges(5, &[(0, 1, 1), (1, 2, 1), (2, 1, 1), (2, 3, 1)]);
        let labeling = topological_labeling(&graph);

        assert_eq!(labeling.label(v(0)), Some(1));
        assert_eq!(labeling.label(v(4)), Some(2));
        assert_eq!(
            labeling.unlabeled().collect::<Vec<_>>(),
            vec![v(1), v(2), v(3)]
        );
        assert_eq!(labeling.label_or_unset(v(4)), 2);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = graph_from_edges(2, &[(0, 0, 1), (1, 0, 1)]);
        let labeling = topological_labeling(&graph);
        assert_eq!(labeling.labels(), &[None, Some(1)]);
    }

    #[test]
    fn test_parallel_edges() {
        let graph = graph_from_edges(2, &[(0, 1, 1), (0, 1, 1)]);
        assert_eq!(labels(&graph), vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_undirected_edges_form_cycles() {
        let mut graph = Graph::new(2);
        graph.add_undirected_edge(0, 1, 1).unwrap();
        assert_eq!(labels(&graph), vec![None, None]);
    }

    #[test]
    fn test_deep_chain() {
        let edges: Vec<(usize, usize, i64)> = (0..99).map(|i| (i, i + 1, 1)).collect();
        let graph = graph_from_edges(100, &edges);
        let labeling = topological_labeling(&graph);

        for i in 0..100 {
            assert_eq!(labeling.label(v(i)), Some(i + 1));
        }
    }
}
