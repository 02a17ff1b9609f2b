//! Adjacency list entries.
//!
//! An [`AdjacencyListNode`] is the record stored on a source vertex for each of its outgoing
//! edges: the destination vertex and the edge weight. The source is implied by the vertex
//! that owns the list.

use std::fmt;

use crate::graph::VertexId;

/// Integer weight carried by every edge.
///
/// Weights are unsigned: negative weights are rejected when edges are added, which is what
/// keeps shortest distances correct.
pub type Weight = u64;

/// An outgoing edge stored in a vertex's adjacency list.
///
/// # Examples
///
/// ```rust
/// use adjgraph::Graph;
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1, 7)?;
///
/// let edge = graph.vertex(0)?.adjacency()[0];
/// assert_eq!(edge.destination().index(), 1);
/// assert_eq!(edge.weight(), 7);
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyListNode {
    destination: VertexId,
    weight: Weight,
}

impl AdjacencyListNode {
    /// Creates a new adjacency list entry.
    ///
    /// The destination is not validated here; [`Graph::add_edge`](crate::Graph::add_edge)
    /// performs that check before storing the entry.
    #[must_use]
    pub const fn new(destination: VertexId, weight: Weight) -> Self {
        AdjacencyListNode {
            destination,
            weight,
        }
    }

    /// Returns the vertex this edge points to.
    #[must_use]
    #[inline]
    pub const fn destination(&self) -> VertexId {
        self.destination
    }

    /// Returns the weight of this edge.
    #[must_use]
    #[inline]
    pub const fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for AdjacencyListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {} (w={})", self.destination, self.weight)
    }
}
