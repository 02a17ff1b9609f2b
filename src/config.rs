//! Algorithm configuration
//!
//! This module provides the knobs that influence otherwise unspecified choices made by the
//! graph algorithms. Every choice has an explicit, deterministic default so that results are
//! reproducible and testable.

use std::cmp::Ordering;

use strum::{Display, EnumIter, EnumString};

use crate::graph::VertexId;

/// Order in which equally ranked vertices are picked.
///
/// Used when several vertices compete for the same position: vertices with equal tentative
/// distance during shortest-distance selection, and vertices that are simultaneously ready
/// during topological labeling.
///
/// # Examples
///
/// ```rust
/// use adjgraph::TieBreak;
///
/// let tie_break: TieBreak = "highest_index".parse().unwrap();
/// assert_eq!(tie_break, TieBreak::HighestIndex);
/// assert_eq!(TieBreak::LowestIndex.to_string(), "lowest_index");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TieBreak {
    /// The vertex with the smaller index wins
    #[default]
    LowestIndex,
    /// The vertex with the larger index wins
    HighestIndex,
}

impl TieBreak {
    /// Compares two vertices by priority.
    ///
    /// Returns [`Ordering::Less`] when `a` should be picked before `b`.
    #[must_use]
    pub fn compare(self, a: VertexId, b: VertexId) -> Ordering {
        match self {
            TieBreak::LowestIndex => a.cmp(&b),
            TieBreak::HighestIndex => b.cmp(&a),
        }
    }
}

/// Configuration shared by the graph algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlgorithmConfig {
    /// Tie-break rule for vertex selection (default: lowest index first)
    pub tie_break: TieBreak,
}

impl AlgorithmConfig {
    /// Creates the default configuration, picking lower indices first
    #[must_use]
    pub fn lowest_index_first() -> Self {
        Self::default()
    }

    /// Creates a configuration that picks higher indices first
    #[must_use]
    pub fn highest_index_first() -> Self {
        Self {
            tie_break: TieBreak::HighestIndex,
        }
    }

    /// Returns a copy with the given tie-break rule
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
