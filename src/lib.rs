// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # adjgraph
//!
//! In-memory adjacency-list graphs with the classic traversal and ordering algorithms:
//! depth-first and breadth-first spanning forests, single-source shortest distances and
//! topological labeling.
//!
//! ## Features
//!
//! - **Fixed vertex set** - Graphs are sized once; vertices are addressed by [`VertexId`]
//! - **Validated population** - Edge endpoints and weights are checked before anything is stored
//! - **Reentrant algorithms** - Per-call state lives in the returned results, never on the graph
//! - **Deterministic output** - Every tie is broken by an explicit, configurable rule
//! - **No recursion** - Traversals use explicit stacks and queues
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph::prelude::*;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 1)?;
//! graph.add_edge(0, 2, 4)?;
//! graph.add_edge(1, 2, 2)?;
//! graph.add_edge(2, 3, 1)?;
//!
//! // Shortest distances from vertex 0
//! let distances = graph.shortest_distances(0)?;
//! assert_eq!(distances[&VertexId::new(3)], Distance::Finite(4));
//!
//! // Spanning forests
//! let dfs = graph.depth_first_search();
//! let bfs = graph.breadth_first_search();
//! assert_eq!(dfs.roots(), bfs.roots());
//!
//! // Topological labels 1..=n
//! let labeling = graph.topological_labeling();
//! assert_eq!(labeling.label(VertexId::new(3)), Some(4));
//! # Ok::<(), adjgraph::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. Errors are precondition violations caught at
//! the API boundary, see [`Error`]. Empty graphs and cyclic input to topological labeling are
//! not errors.
//!
//! ## Logging
//!
//! The crate reports algorithm summaries through the [`log`](https://docs.rs/log) facade at
//! `debug` level and per-vertex progress at `trace` level. No logger is installed by the
//! library.

#[macro_use]
pub(crate) mod error;

mod config;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use adjgraph::prelude::*;
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1, 3)?;
/// assert_eq!(graph.topological_labeling().order().len(), 2);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub mod prelude;

/// Graph storage, traits and algorithms
///
/// See [`Graph`] for construction and population, and [`algorithms`] for the available
/// algorithms and their result types.
pub mod graph;

pub use graph::algorithms;

/// `adjgraph` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `adjgraph` Error type
///
/// Every fallible operation in this crate reports one of its variants.
pub use error::Error;

/// Algorithm configuration
pub use config::{AlgorithmConfig, TieBreak};

/// Core graph types
pub use graph::{
    AdjacencyListNode, Graph, GraphBase, InDegree, Successors, Vertex, VertexId, Weight,
    WeightedSuccessors,
};

/// Algorithm results
pub use graph::algorithms::{
    Distance, PathWeight, ShortestPaths, SpanningForest, TopologicalLabeling, TraversalKind,
};
