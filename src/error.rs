use thiserror::Error;

macro_rules! out_of_range {
    ($index:expr, $count:expr) => {
        crate::Error::IndexOutOfRange {
            index: $index,
            vertex_count: $count,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant is a precondition violation detected at the API boundary. A call that returns
/// an error has not modified the graph it was invoked on.
///
/// # Error Categories
///
/// - [`Error::IndexOutOfRange`] - A vertex index does not name a vertex of the graph
/// - [`Error::InvalidEdgeWeight`] - A negative weight was supplied while populating edges
///
/// Empty graphs and cyclic input to topological labeling are valid input and never produce an
/// error.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Error, Graph};
///
/// let mut graph = Graph::new(2);
///
/// match graph.add_edge(0, 5, 1) {
///     Err(Error::IndexOutOfRange { index, vertex_count }) => {
///         assert_eq!(index, 5);
///         assert_eq!(vertex_count, 2);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index was outside `[0, vertex_count)`.
    ///
    /// Raised for edge endpoints during population, for the start vertex of a shortest
    /// distance query and for direct vertex lookups.
    ///
    /// # Fields
    ///
    /// * `index` - The rejected index
    /// * `vertex_count` - Number of vertices in the graph that rejected it
    #[error("Vertex index {index} is out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange {
        /// The index that was rejected
        index: usize,
        /// The number of vertices of the graph
        vertex_count: usize,
    },

    /// An edge was given a negative weight.
    ///
    /// Shortest distances are only correct for non-negative weights, so such edges are refused
    /// when the graph is populated instead of producing wrong distances later.
    #[error("Edge {from} -> {to} has negative weight {weight}")]
    InvalidEdgeWeight {
        /// Index of the edge's source vertex
        from: usize,
        /// Index of the edge's destination vertex
        to: usize,
        /// The weight that was supplied
        weight: i64,
    },
}
