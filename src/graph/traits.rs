//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`algorithms`](crate::graph::algorithms) are written against these
//! traits rather than against [`Graph`](crate::Graph) directly, so any adjacency source that
//! can answer the same questions can be traversed.
//!
//! - [`GraphBase`] - Vertex count and vertex iteration
//! - [`Successors`] - Forward edge traversal in adjacency-list order
//! - [`WeightedSuccessors`] - Forward edge traversal with weights
//! - [`InDegree`] - Static in-degree per vertex
//!
//! All adjacency queries return iterators, and each trait requires only what its algorithms
//! need.

use crate::graph::{VertexId, Weight};

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending index order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, Successors, VertexId};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(0, 1, 1)?;
///
/// let successors: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
/// assert_eq!(successors, vec![VertexId::new(2), VertexId::new(1)]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns the destinations of the outgoing edges of `vertex`, in adjacency-list order.
    ///
    /// Parallel edges yield the destination once per edge.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex of the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs whose edges carry weights.
pub trait WeightedSuccessors: Successors {
    /// Returns `(destination, weight)` for each outgoing edge of `vertex`, in adjacency-list
    /// order.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex of the graph.
    fn weighted_successors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)>;

    /// Returns the weight of the edge `from -> to`, or `None` if there is no such edge.
    ///
    /// The default implementation scans the adjacency list of `from` and returns the smallest
    /// weight among parallel edges.
    fn weight_between(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.weighted_successors(from)
            .filter(|&(destination, _)| destination == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for graphs that know the number of incoming edges of each vertex.
pub trait InDegree: GraphBase {
    /// Returns the number of edges pointing at `vertex`.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex of the graph.
    fn in_degree(&self, vertex: VertexId) -> usize;
}
