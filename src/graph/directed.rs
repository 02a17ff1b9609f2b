//! Core graph implementation.
//!
//! This module provides [`Graph`], a fixed-size directed graph stored as one adjacency list
//! per vertex. The vertex set is created once and never resized; edges are added through
//! [`Graph::add_edge`] and [`Graph::add_undirected_edge`] before algorithms run.

use std::collections::BTreeMap;

use crate::{
    config::AlgorithmConfig,
    graph::{
        algorithms::{self, Distance, ShortestPaths, SpanningForest, TopologicalLabeling},
        traits::{GraphBase, InDegree, Successors, WeightedSuccessors},
        AdjacencyListNode, Vertex, VertexId, Weight,
    },
    Error, Result,
};

/// A directed graph with weighted edges stored as adjacency lists.
///
/// `Graph` owns exactly `n` [`Vertex`] values, addressed by [`VertexId`] `0..n`. Each vertex
/// keeps its outgoing edges in insertion order together with its in-degree, which is
/// maintained as edges are added.
///
/// All algorithms borrow the graph immutably and keep their scratch state in the value they
/// return, so results from different runs never interfere and the graph can be shared
/// between threads once populated.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Distance, Graph, VertexId};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 4)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let distances = graph.shortest_distances(0)?;
/// assert_eq!(distances[&VertexId::new(2)], Distance::Finite(3));
/// assert_eq!(distances[&VertexId::new(3)], Distance::Finite(4));
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vertex storage, position equals vertex index
    vertices: Vec<Vertex>,
    /// Total number of adjacency entries over all vertices
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// Vertices `0..vertex_count` exist immediately with empty adjacency lists. A graph with
    /// zero vertices is valid and every algorithm returns an empty result for it.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            vertices: (0..vertex_count).map(|i| Vertex::new(VertexId::new(i))).collect(),
            edge_count: 0,
        }
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges in the graph.
    ///
    /// An undirected edge added with [`add_undirected_edge`](Self::add_undirected_edge)
    /// counts as two directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns all vertices, indexed by their [`VertexId`].
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `vertex` is not a vertex of this graph.
    pub fn vertex(&self, vertex: impl Into<VertexId>) -> Result<&Vertex> {
        let vertex = self.check(vertex.into())?;
        Ok(&self.vertices[vertex.index()])
    }

    /// Returns an iterator over all vertex identifiers in ascending order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns `true` if `vertex` names a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Adds a directed edge `from -> to` with the given weight.
    ///
    /// The edge is appended to the adjacency list of `from`, so traversals consider it after
    /// all edges previously added to that vertex. Parallel edges and self-loops are allowed.
    /// The in-degree of `to` is incremented.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of this graph,
    /// or [`Error::InvalidEdgeWeight`] if `weight` is negative. The graph is left unchanged
    /// on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjgraph::{Error, Graph};
    ///
    /// let mut graph = Graph::new(2);
    /// graph.add_edge(0, 1, 3)?;
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph.vertex(1)?.in_degree(), 1);
    ///
    /// assert!(matches!(
    ///     graph.add_edge(1, 0, -1),
    ///     Err(Error::InvalidEdgeWeight { .. })
    /// ));
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), adjgraph::Error>(())
    /// ```
    pub fn add_edge(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
        weight: i64,
    ) -> Result<()> {
        let from = self.check(from.into())?;
        let to = self.check(to.into())?;
        let weight = Self::check_weight(from, to, weight)?;

        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Adds an undirected edge between `a` and `b` as two reciprocal directed edges.
    ///
    /// An entry `a -> b` is appended to `a`'s adjacency list and `b -> a` to `b`'s. For a
    /// self-loop (`a == b`) a single entry is added.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge). Both endpoints and the weight are validated
    /// before either entry is inserted.
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<VertexId>,
        b: impl Into<VertexId>,
        weight: i64,
    ) -> Result<()> {
        let a = self.check(a.into())?;
        let b = self.check(b.into())?;
        let weight = Self::check_weight(a, b, weight)?;

        self.insert_edge(a, b, weight);
        if a != b {
            self.insert_edge(b, a, weight);
        }
        Ok(())
    }

    /// Returns the weight of the edge `from -> to`.
    ///
    /// `Ok(None)` means both vertices exist but are not connected in that direction. With
    /// parallel edges the smallest weight is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of this graph.
    pub fn edge_weight(
        &self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
    ) -> Result<Option<Weight>> {
        let from = self.check(from.into())?;
        let to = self.check(to.into())?;
        Ok(self.vertices[from.index()].weight_to(to))
    }

    /// Returns `true` if there is at least one edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex of this graph.
    pub fn contains_edge(&self, from: impl Into<VertexId>, to: impl Into<VertexId>) -> Result<bool> {
        Ok(self.edge_weight(from, to)?.is_some())
    }

    /// Runs a depth-first traversal over the whole graph.
    ///
    /// See [`algorithms::depth_first_search`].
    #[must_use]
    pub fn depth_first_search(&self) -> SpanningForest {
        algorithms::depth_first_search(self)
    }

    /// Runs a breadth-first traversal over the whole graph.
    ///
    /// See [`algorithms::breadth_first_search`].
    #[must_use]
    pub fn breadth_first_search(&self) -> SpanningForest {
        algorithms::breadth_first_search(self)
    }

    /// Computes the shortest distance from `start` to every other vertex.
    ///
    /// See [`algorithms::shortest_distances`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of this graph.
    pub fn shortest_distances(
        &self,
        start: impl Into<VertexId>,
    ) -> Result<BTreeMap<VertexId, Distance>> {
        algorithms::shortest_distances(self, start.into())
    }

    /// Computes shortest distances and paths from `start`.
    ///
    /// See [`algorithms::shortest_paths`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of this graph.
    pub fn shortest_paths(&self, start: impl Into<VertexId>) -> Result<ShortestPaths> {
        algorithms::shortest_paths(self, start.into())
    }

    /// Computes shortest distances and paths from `start` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` is not a vertex of this graph.
    pub fn shortest_paths_with_config(
        &self,
        start: impl Into<VertexId>,
        config: &AlgorithmConfig,
    ) -> Result<ShortestPaths> {
        algorithms::shortest_paths_with_config(self, start.into(), config)
    }

    /// Assigns topological labels to the vertices.
    ///
    /// See [`algorithms::topological_labeling`].
    #[must_use]
    pub fn topological_labeling(&self) -> TopologicalLabeling {
        algorithms::topological_labeling(self)
    }

    /// Assigns topological labels to the vertices using `config`.
    #[must_use]
    pub fn topological_labeling_with_config(&self, config: &AlgorithmConfig) -> TopologicalLabeling {
        algorithms::topological_labeling_with_config(self, config)
    }

    fn check(&self, vertex: VertexId) -> Result<VertexId> {
        if self.contains_vertex(vertex) {
            Ok(vertex)
        } else {
            Err(out_of_range!(vertex.index(), self.vertices.len()))
        }
    }

    fn check_weight(from: VertexId, to: VertexId, weight: i64) -> Result<Weight> {
        Weight::try_from(weight).map_err(|_| Error::InvalidEdgeWeight {
            from: from.index(),
            to: to.index(),
            weight,
        })
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.vertices[from.index()].push_edge(AdjacencyListNode::new(to, weight));
        self.vertices[to.index()].increment_in_degree();
        self.edge_count += 1;
    }
}

impl GraphBase for Graph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

impl Successors for Graph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.vertices[vertex.index()]
            .adjacency()
            .iter()
            .map(AdjacencyListNode::destination)
    }
}

impl WeightedSuccessors for Graph {
    fn weighted_successors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> {
        self.vertices[vertex.index()]
            .adjacency()
            .iter()
            .map(|node| (node.destination(), node.weight()))
    }
}

impl InDegree for Graph {
    fn in_degree(&self, vertex: VertexId) -> usize {
        self.vertices[vertex.index()].in_degree()
    }
}
