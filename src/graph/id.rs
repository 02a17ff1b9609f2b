//! Vertex identifier implementation.
//!
//! This module provides the [`VertexId`] type, a strongly-typed index of a vertex within a
//! [`Graph`](crate::Graph). The newtype wrapper keeps vertex indices apart from weights,
//! labels and other integers flowing through the algorithms.

use std::fmt;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps the 0-based position of a vertex in its graph's backing collection. A
/// graph created with `n` vertices owns exactly the ids `0..n`; every public entry point
/// validates ids against that range.
///
/// # Examples
///
/// ```rust
/// use adjgraph::VertexId;
///
/// let a = VertexId::new(0);
/// let b: VertexId = 3.into();
///
/// assert!(a < b);
/// assert_eq!(b.index(), 3);
/// assert_eq!(b.to_string(), "v3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index can be used to address per-vertex vectors, which is how every algorithm in
    /// this crate keeps its scratch state.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
