//! Whole-graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversals that cover every vertex of a
//! graph, restarting from the lowest-indexed unvisited vertex whenever the current component
//! is exhausted. Both produce a [`SpanningForest`] describing the discovery order and the
//! predecessor of each vertex.
//!
//! # Algorithms
//!
//! - [`depth_first_search`] - Iterative depth-first search (pre-order)
//! - [`breadth_first_search`] - Level-by-level search with a FIFO queue
//!
//! Neither algorithm recurses, so long paths do not grow the call stack. Both run in
//! O(V + E) time and O(V) space.

use std::collections::VecDeque;

use strum::Display;

use crate::graph::{Successors, VertexId};

/// The traversal strategy that produced a [`SpanningForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TraversalKind {
    /// Depth-first search
    DepthFirst,
    /// Breadth-first search
    BreadthFirst,
}

/// The result of a whole-graph traversal.
///
/// Every vertex of the traversed graph is visited exactly once. Each vertex records the
/// vertex it was discovered from; the first vertex of each tree is a root and is recorded as
/// its own predecessor. Following predecessors from any vertex always ends at a root, so the
/// predecessor relation forms a forest spanning the whole vertex set.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{Graph, VertexId};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let forest = graph.depth_first_search();
/// assert_eq!(forest.roots(), &[VertexId::new(0), VertexId::new(2)]);
/// assert_eq!(forest.predecessor(VertexId::new(3)), Some(VertexId::new(2)));
/// assert_eq!(forest.depth(VertexId::new(3)), Some(1));
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    kind: TraversalKind,
    /// Vertices in the order they were discovered
    order: Vec<VertexId>,
    /// Discovering vertex per vertex, `None` while unvisited
    predecessors: Vec<Option<VertexId>>,
    /// Tree roots in the order they were started
    roots: Vec<VertexId>,
}

impl SpanningForest {
    fn new(kind: TraversalKind, vertex_count: usize) -> Self {
        SpanningForest {
            kind,
            order: Vec::with_capacity(vertex_count),
            predecessors: vec![None; vertex_count],
            roots: Vec::new(),
        }
    }

    fn discover(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors[vertex.index()] = Some(predecessor);
        self.order.push(vertex);
    }

    fn start_tree(&mut self, root: VertexId) {
        self.discover(root, root);
        self.roots.push(root);
    }

    /// Returns the strategy that produced this forest.
    #[must_use]
    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Returns all vertices in discovery order.
    #[must_use]
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Returns the root of each tree in the order the trees were started.
    #[must_use]
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Returns the number of vertices covered by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Returns `true` if the forest covers no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Returns `true` if the traversal reached `vertex`.
    ///
    /// After a complete traversal this holds for every vertex of the graph.
    #[must_use]
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.predecessor(vertex).is_some()
    }

    /// Returns the vertex `vertex` was discovered from.
    ///
    /// Roots are their own predecessor. Returns `None` for vertices outside the graph.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Returns the predecessor of every vertex, indexed by vertex.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Returns `true` if `vertex` started a tree.
    #[must_use]
    pub fn is_root(&self, vertex: VertexId) -> bool {
        self.predecessor(vertex) == Some(vertex)
    }

    /// Returns the number of tree edges between `vertex` and the root of its tree.
    ///
    /// For a breadth-first forest this is the minimum number of edges from the root to
    /// `vertex`.
    #[must_use]
    pub fn depth(&self, vertex: VertexId) -> Option<usize> {
        self.path_from_root(vertex).map(|path| path.len() - 1)
    }

    /// Returns the tree path from the root of `vertex`'s tree down to `vertex`.
    ///
    /// The path starts at the root and ends at `vertex`. Returns `None` for vertices outside
    /// the graph.
    #[must_use]
    pub fn path_from_root(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![vertex];
        let mut current = vertex;
        loop {
            let predecessor = self.predecessor(current)?;
            if predecessor == current {
                break;
            }
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }

    /// Returns every tree edge as `(predecessor, vertex)`, in discovery order.
    pub fn tree_edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.order.iter().filter_map(|&vertex| {
            self.predecessor(vertex)
                .filter(|&predecessor| predecessor != vertex)
                .map(|predecessor| (predecessor, vertex))
        })
    }
}

/// Runs a depth-first traversal over every vertex of `graph`.
///
/// Vertices are tried as roots in ascending index order. From each unvisited root the search
/// descends into the first unvisited successor (in adjacency-list order) before considering
/// the next one, exactly as a recursive visit would, but uses an explicit stack of successor
/// iterators instead of recursion.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
///
/// # Returns
///
/// A depth-first [`SpanningForest`] covering every vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::depth_first_search, Graph, VertexId};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 3, 1)?;
///
/// let forest = depth_first_search(&graph);
/// let order: Vec<usize> = forest.order().iter().map(|v| v.index()).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn depth_first_search<G: Successors>(graph: &G) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let mut forest = SpanningForest::new(TraversalKind::DepthFirst, vertex_count);
    let mut visited = vec![false; vertex_count];

    for root in graph.vertex_ids() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        forest.start_tree(root);

        let mut stack = vec![(root, graph.successors(root))];
        while let Some((vertex, successors)) = stack.last_mut() {
            let vertex = *vertex;
            match successors.find(|succ| !visited[succ.index()]) {
                Some(next) => {
                    visited[next.index()] = true;
                    forest.discover(next, vertex);
                    stack.push((next, graph.successors(next)));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    log::debug!(
        "depth-first traversal visited {} vertices in {} trees",
        forest.order.len(),
        forest.roots.len()
    );
    forest
}

/// Runs a breadth-first traversal over every vertex of `graph`.
///
/// Vertices are tried as roots in ascending index order. Each root is enqueued, then vertices
/// are dequeued in FIFO order and their unvisited successors (in adjacency-list order) are
/// marked visited and enqueued. Marking happens at enqueue time so no vertex is queued twice.
///
/// The resulting trees are shortest-hop trees: [`SpanningForest::depth`] is the minimum
/// number of edges from the root.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
///
/// # Returns
///
/// A breadth-first [`SpanningForest`] covering every vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::breadth_first_search, Graph, VertexId};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 2, 1)?;
/// graph.add_edge(2, 3, 1)?;
///
/// let forest = breadth_first_search(&graph);
/// assert_eq!(forest.predecessor(VertexId::new(2)), Some(VertexId::new(0)));
/// assert_eq!(forest.predecessor(VertexId::new(3)), Some(VertexId::new(2)));
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn breadth_first_search<G: Successors>(graph: &G) -> SpanningForest {
    let vertex_count = graph.vertex_count();
    let mut forest = SpanningForest::new(TraversalKind::BreadthFirst, vertex_count);
    let mut visited = vec![false; vertex_count];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    for root in graph.vertex_ids() {
        if visited[root.index()] {
            continue;
        }

        visited[root.index()] = true;
        forest.start_tree(root);
        queue.push_back(root);

        while let Some(vertex) = queue.pop_front() {
            for succ in graph.successors(vertex) {
                if !visited[succ.index()] {
                    visited[succ.index()] = true;
                    forest.discover(succ, vertex);
                    queue.push_back(succ);
                }
            }
        }
    }

    log::debug!(
        "breadth-first traversal visited {} vertices in {} trees",
        forest.order.len(),
        forest.roots.len()
    );
    forest
}
