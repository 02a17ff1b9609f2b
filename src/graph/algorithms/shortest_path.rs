//! Single-source shortest distances for non-negative edge weights.
//!
//! This module computes, for a start vertex, the minimum total edge weight needed to reach
//! every other vertex. Vertices are finalised one at a time in order of increasing tentative
//! distance (Dijkstra's selection rule); after each finalisation the distances of its
//! unfinalised neighbours are relaxed.
//!
//! # Unreachable vertices
//!
//! A vertex without any path from the start has distance [`Distance::Unreachable`]. This is a
//! distinct state rather than a large number, so no arithmetic is ever performed on it.
//! Callers needing the classic integer view can use [`Distance::value`], which renders the
//! unreachable state as [`Distance::SENTINEL`].
//!
//! # Path weights
//!
//! Edge weights are at most `i64::MAX`, and a shortest path uses fewer than `V` edges.
//! Distances are accumulated as [`PathWeight`] (`u128`), which holds any such sum, so a
//! reachable vertex always gets its exact distance and never collides with the sentinel.
//!
//! # Complexity
//!
//! Selection scans the vertex set, so the whole computation is O(V² + E), independent of
//! edge density.

use std::{cmp::Ordering, collections::BTreeMap, fmt};

use crate::{
    config::AlgorithmConfig,
    graph::{VertexId, Weight, WeightedSuccessors},
    Result,
};

/// Total weight of a path.
///
/// Wide enough for `usize::MAX` edges of the largest accepted edge weight.
pub type PathWeight = u128;

/// The length of a shortest path, or the absence of any path.
///
/// Ordering places every finite distance before [`Distance::Unreachable`], so the derived
/// `Ord` is the natural "shorter is smaller" comparison.
///
/// # Examples
///
/// ```rust
/// use adjgraph::Distance;
///
/// assert!(Distance::Finite(u128::from(u64::MAX) * 2) < Distance::Unreachable);
/// assert_eq!(Distance::Finite(3).extend(4), Distance::Finite(7));
/// assert_eq!(Distance::Unreachable.extend(4), Distance::Unreachable);
/// assert_eq!(Distance::Unreachable.value(), Distance::SENTINEL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    /// A path of the given total weight exists
    Finite(PathWeight),
    /// No path exists
    Unreachable,
}

impl Distance {
    /// Integer stand-in for [`Distance::Unreachable`] returned by [`Distance::value`].
    ///
    /// No path sum in a [`Graph`](crate::Graph) can reach this value.
    pub const SENTINEL: PathWeight = PathWeight::MAX;

    /// Returns `true` if a path exists.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns `true` if no path exists.
    #[must_use]
    pub const fn is_unreachable(self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the path weight, or `None` if no path exists.
    #[must_use]
    pub const fn finite(self) -> Option<PathWeight> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Unreachable => None,
        }
    }

    /// Returns the path weight, or [`Distance::SENTINEL`] if no path exists.
    #[must_use]
    pub const fn value(self) -> PathWeight {
        match self {
            Distance::Finite(weight) => weight,
            Distance::Unreachable => Self::SENTINEL,
        }
    }

    /// Returns the distance of a path extended by one edge of weight `weight`.
    ///
    /// Unreachable stays unreachable without touching `weight`. Sums along paths of a
    /// [`Graph`](crate::Graph) always fit; a sum that does not fit in [`PathWeight`] is
    /// reported as unreachable.
    #[must_use]
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(distance) => distance
                .checked_add(PathWeight::from(weight))
                .map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<Option<Weight>> for Distance {
    fn from(weight: Option<Weight>) -> Self {
        weight.map_or(Distance::Unreachable, |weight| {
            Distance::Finite(PathWeight::from(weight))
        })
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Shortest distances and paths from a single start vertex.
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
/// let paths = graph.shortest_paths(0)?;
/// assert_eq!(paths.distance(VertexId::new(3)), Some(Distance::Finite(4)));
///
/// let route: Vec<usize> = paths
///     .path_to(VertexId::new(3))
///     .unwrap()
///     .iter()
///     .map(|v| v.index())
///     .collect();
/// assert_eq!(route, vec![0, 1, 2, 3]);
/// # Ok::<(), adjgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    distances: Vec<Distance>,
    /// Previous vertex on the best known path, `None` for the start and unreachable vertices
    predecessors: Vec<Option<VertexId>>,
    /// Vertices in the order they were finalised, starting with the start vertex
    settled: Vec<VertexId>,
}

impl ShortestPaths {
    /// Returns the vertex distances were measured from.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the shortest distance from the start to `vertex`.
    ///
    /// The start itself has distance `Finite(0)`. Returns `None` for vertices outside the
    /// graph.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex.index()).copied()
    }

    /// Returns all distances, indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Returns `true` if some path leads from the start to `vertex`.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some_and(Distance::is_finite)
    }

    /// Returns the vertex preceding `vertex` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Returns the vertices reachable from the start in the order they were finalised.
    ///
    /// Distances along this sequence never decrease.
    #[must_use]
    pub fn settled(&self) -> &[VertexId] {
        &self.settled
    }

    /// Returns a shortest path from the start to `vertex`, both ends included.
    ///
    /// Returns `None` if `vertex` is unreachable or outside the graph.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(predecessor) = self.predecessor(current) {
            path.push(predecessor);
            current = predecessor;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the distance of every vertex except the start, keyed by vertex.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<VertexId, Distance> {
        self.distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| (VertexId::new(index), distance))
            .filter(|&(vertex, _)| vertex != self.start)
            .collect()
    }
}

/// Computes the shortest distance from `start` to every other vertex.
///
/// The returned map has one entry per vertex except `start`; vertices without a path from
/// `start` map to [`Distance::Unreachable`]. Uses the default [`AlgorithmConfig`].
///
/// # Arguments
///
/// * `graph` - The graph to measure
/// * `start` - The vertex distances are measured from
///
/// # Returns
///
/// A map from every vertex other than `start` to its [`Distance`], empty for an empty graph.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `start` is not a
/// vertex of a non-empty `graph`.
///
/// # Examples
///
/// ```rust
/// use adjgraph::{algorithms::shortest_distances, Distance, Graph, VertexId};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1)?;
///
/// let distances = shortest_distances(&graph, VertexId::new(0))?;
/// assert_eq!(distances.len(), 2);
/// assert_eq!(distances[&VertexId::new(1)], Distance::Finite(1));
/// assert_eq!(distances[&VertexId::new(2)], Distance::Unreachable);
/// # Ok::<(), adjgraph::Error>(())
/// ```
pub fn shortest_distances<G: WeightedSuccessors>(
    graph: &G,
    start: VertexId,
) -> Result<BTreeMap<VertexId, Distance>> {
    Ok(shortest_paths(graph, start)?.to_map())
}

/// Computes shortest distances and paths from `start` with the default configuration.
///
/// # Arguments
///
/// * `graph` - The graph to measure
/// * `start` - The vertex distances are measured from
///
/// # Returns
///
/// The [`ShortestPaths`] from `start`, see [`shortest_paths_with_config`].
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `start` is not a
/// vertex of a non-empty `graph`.
pub fn shortest_paths<G: WeightedSuccessors>(graph: &G, start: VertexId) -> Result<ShortestPaths> {
    shortest_paths_with_config(graph, start, &AlgorithmConfig::default())
}

/// Computes shortest distances and paths from `start`.
///
/// # Algorithm
///
/// 1. Every vertex other than `start` gets the weight of the direct edge from `start` as its
///    tentative distance, or unreachable if there is none. `start` is finalised at 0.
/// 2. Among unfinalised vertices with a finite tentative distance, select the smallest;
///    equal distances are ordered by `config.tie_break`.
/// 3. Finalise it and relax each unfinalised successor: if the finalised distance plus the
///    edge weight beats the successor's tentative distance, record the new distance.
/// 4. Repeat until every vertex is finalised or no unfinalised vertex has a finite
///    distance; the remaining vertices are unreachable.
///
/// Correct for non-negative weights, which [`Graph::add_edge`](crate::Graph::add_edge)
/// guarantees. An empty graph yields an empty result for any `start`.
///
/// # Arguments
///
/// * `graph` - The graph to measure
/// * `start` - The vertex distances are measured from
/// * `config` - Tie-break rule for vertices at equal tentative distance
///
/// # Returns
///
/// A [`ShortestPaths`] holding the distance and predecessor of every vertex and the order
/// in which vertices were finalised.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `start` is not a
/// vertex of a non-empty `graph`.
pub fn shortest_paths_with_config<G: WeightedSuccessors>(
    graph: &G,
    start: VertexId,
    config: &AlgorithmConfig,
) -> Result<ShortestPaths> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(ShortestPaths {
            start,
            distances: Vec::new(),
            predecessors: Vec::new(),
            settled: Vec::new(),
        });
    }
    if start.index() >= vertex_count {
        return Err(out_of_range!(start.index(), vertex_count));
    }

    let mut distances = vec![Distance::Unreachable; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut finalized = vec![false; vertex_count];
    let mut settled = Vec::with_capacity(vertex_count);

    for vertex in graph.vertex_ids() {
        if vertex == start {
            continue;
        }
        if let Some(weight) = graph.weight_between(start, vertex) {
            distances[vertex.index()] = Distance::Finite(weight.into());
            predecessors[vertex.index()] = Some(start);
        }
    }
    distances[start.index()] = Distance::Finite(0);
    finalized[start.index()] = true;
    settled.push(start);

    while settled.len() < vertex_count {
        let Some((distance, vertex)) = graph
            .vertex_ids()
            .filter(|vertex| !finalized[vertex.index()])
            .filter_map(|vertex| {
                distances[vertex.index()]
                    .finite()
                    .map(|distance| (distance, vertex))
            })
            .min_by(|(distance_a, a), (distance_b, b)| match distance_a.cmp(distance_b) {
                Ordering::Equal => config.tie_break.compare(*a, *b),
                ordering => ordering,
            })
        else {
            log::debug!(
                "shortest paths from {}: {} vertices unreachable",
                start,
                vertex_count - settled.len()
            );
            break;
        };

        finalized[vertex.index()] = true;
        settled.push(vertex);
        log::trace!("finalised {} at distance {}", vertex, distance);

        for (successor, weight) in graph.weighted_successors(vertex) {
            if finalized[successor.index()] {
                continue;
            }
            let candidate = Distance::Finite(distance).extend(weight);
            if candidate < distances[successor.index()] {
                distances[successor.index()] = candidate;
                predecessors[successor.index()] = Some(vertex);
            }
        }
    }

    Ok(ShortestPaths {
        start,
        distances,
        predecessors,
        settled,
    })
}
