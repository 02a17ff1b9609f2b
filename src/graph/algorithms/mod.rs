//! Graph algorithms.
//!
//! Every algorithm borrows its graph immutably and returns a result value holding the
//! per-vertex state it computed. Nothing is stored on the graph itself, so algorithms can run
//! in any order, repeatedly, or concurrently against the same graph.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`depth_first_search`] - Depth-first spanning forest over all vertices
//! - [`breadth_first_search`] - Breadth-first spanning forest over all vertices
//!
//! ## Shortest Distances
//!
//! - [`shortest_distances`] - Distance from a start vertex to every other vertex
//! - [`shortest_paths`] - Distances plus the paths realising them
//!
//! ## Topological Ordering
//!
//! - [`topological_labeling`] - Kahn's algorithm, labels `1..=n`
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, spanning forests, hop counts |
//! | Shortest distances | O(V² + E) | Weighted routing with non-negative weights |
//! | Topological labeling | O((V + E) log V) | Dependency ordering, cycle detection |
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::{algorithms, Graph, VertexId};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 2)?;
//! graph.add_edge(1, 2, 2)?;
//!
//! let forest = algorithms::breadth_first_search(&graph);
//! assert_eq!(forest.depth(VertexId::new(2)), Some(2));
//!
//! let labeling = algorithms::topological_labeling(&graph);
//! assert_eq!(labeling.order(), &[VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
//! # Ok::<(), adjgraph::Error>(())
//! ```

mod shortest_path;
mod topological;
mod traversal;

pub use shortest_path::{
    shortest_distances, shortest_paths, shortest_paths_with_config, Distance, PathWeight,
    ShortestPaths,
};
pub use topological::{topological_labeling, topological_labeling_with_config, TopologicalLabeling};
pub use traversal::{breadth_first_search, depth_first_search, SpanningForest, TraversalKind};
