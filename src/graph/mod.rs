//! Adjacency-list graph infrastructure.
//!
//! This module provides a fixed-size directed graph with weighted edges, together with the
//! traversal, shortest-distance and topological algorithms that run on it.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`AdjacencyListNode`], [`Vertex`] and [`Graph`]
//! - **Traits**: [`GraphBase`], [`Successors`], [`WeightedSuccessors`] and [`InDegree`], the
//!   seams the algorithms are written against
//! - **Algorithms**: [`algorithms`] and their result types
//!
//! # Design Principles
//!
//! ## Fixed Vertex Set
//!
//! A graph is created with its final number of vertices. Edges are added afterwards and may
//! reference only existing vertices.
//!
//! ## Directed Storage
//!
//! Each edge is stored once, on its source vertex. An undirected edge is two reciprocal
//! entries, see [`Graph::add_undirected_edge`].
//!
//! ## Read-Only Algorithms
//!
//! Algorithms keep visited flags, predecessors, working counts and labels in the value they
//! return, never on the vertices.
//!
//! # Examples
//!
//! ```rust
//! use adjgraph::{Graph, VertexId};
//!
//! // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1)?;
//! graph.add_edge(0, 2, 1)?;
//! graph.add_edge(1, 3, 1)?;
//! graph.add_edge(2, 3, 1)?;
//!
//! let forest = graph.breadth_first_search();
//! assert_eq!(forest.predecessor(VertexId::new(3)), Some(VertexId::new(1)));
//! # Ok::<(), adjgraph::Error>(())
//! ```

mod directed;
mod edge;
mod id;
mod traits;
mod vertex;

pub mod algorithms;

pub use directed::Graph;
pub use edge::{AdjacencyListNode, Weight};
pub use id::VertexId;
pub use traits::{GraphBase, InDegree, Successors, WeightedSuccessors};
pub use vertex::Vertex;
