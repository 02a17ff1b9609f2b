//! # adjgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the adjgraph library. Import it to build graphs and run algorithms without
//! naming individual modules.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all adjgraph operations
pub use crate::Error;

/// The result type used throughout adjgraph
pub use crate::Result;

/// Configuration shared by the algorithms
pub use crate::{AlgorithmConfig, TieBreak};

// ================================================================================================
// Graph Storage
// ================================================================================================

/// The graph, its vertices and edges
pub use crate::graph::{AdjacencyListNode, Graph, Vertex, VertexId, Weight};

/// Traits the algorithms are generic over
pub use crate::graph::{GraphBase, InDegree, Successors, WeightedSuccessors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Algorithm entry points
pub use crate::graph::algorithms::{
    breadth_first_search, depth_first_search, shortest_distances, shortest_paths,
    topological_labeling,
};

/// Algorithm results
pub use crate::graph::algorithms::{
    Distance, PathWeight, ShortestPaths, SpanningForest, TopologicalLabeling, TraversalKind,
};
