//! Vertex storage.
//!
//! A [`Vertex`] owns its identity, its ordered adjacency list and its in-degree. It holds no
//! traversal state: depth-first, breadth-first, shortest-distance and topological runs keep
//! their per-vertex bookkeeping in the result values they return.

use crate::graph::{AdjacencyListNode, VertexId, Weight};

/// A vertex of a [`Graph`](crate::Graph).
///
/// The adjacency list preserves insertion order, which is the order in which traversals
/// consider neighbours. The in-degree counts every adjacency entry in the graph that points
/// at this vertex and is maintained by the graph's population methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    index: VertexId,
    adjacency: Vec<AdjacencyListNode>,
    in_degree: usize,
}

impl Vertex {
    pub(crate) fn new(index: VertexId) -> Self {
        Vertex {
            index,
            adjacency: Vec::new(),
            in_degree: 0,
        }
    }

    /// Returns the identity of this vertex, equal to its position in the graph.
    #[must_use]
    #[inline]
    pub fn index(&self) -> VertexId {
        self.index
    }

    /// Returns the outgoing edges of this vertex in insertion order.
    #[must_use]
    pub fn adjacency(&self) -> &[AdjacencyListNode] {
        &self.adjacency
    }

    /// Returns the number of edges pointing at this vertex.
    #[must_use]
    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Returns the number of edges leaving this vertex.
    #[must_use]
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if at least one outgoing edge points at `destination`.
    #[must_use]
    pub fn contains_edge_to(&self, destination: VertexId) -> bool {
        self.adjacency
            .iter()
            .any(|node| node.destination() == destination)
    }

    /// Returns the weight of the edge from this vertex to `destination`.
    ///
    /// Performs a linear scan of the adjacency list. If parallel edges exist the smallest
    /// weight is returned; `None` means there is no such edge.
    #[must_use]
    pub fn weight_to(&self, destination: VertexId) -> Option<Weight> {
        self.adjacency
            .iter()
            .filter(|node| node.destination() == destination)
            .map(AdjacencyListNode::weight)
            .min()
    }

    pub(crate) fn push_edge(&mut self, node: AdjacencyListNode) {
        self.adjacency.push(node);
    }

    pub(crate) fn increment_in_degree(&mut self) {
        self.in_degree += 1;
    }
}
