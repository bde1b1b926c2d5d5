//! Builder utilities for configuring [`Graph`] instances.
//!
//! Exposes the tie-break policy applied by Kruskal iterators and the capacity
//! hints used to pre-size the node and edge storage.

use crate::Graph;

/// Decides which of several equal-weight edges a Kruskal iterator considers
/// first.
///
/// Either policy is deterministic: the same graph always yields the same
/// forest edge sequence.
///
/// # Examples
/// ```
/// use kruskal_core::TieBreak;
///
/// assert_eq!(TieBreak::default(), TieBreak::InsertionOrder);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TieBreak {
    /// Earlier-added edges win ties.
    #[default]
    InsertionOrder,
    /// Later-added edges win ties.
    LatestFirst,
}

impl TieBreak {
    /// Maps an edge's insertion sequence onto the secondary priority key.
    pub(crate) const fn order_key(self, sequence: usize) -> usize {
        match self {
            Self::InsertionOrder => sequence,
            Self::LatestFirst => usize::MAX - sequence,
        }
    }
}

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, GraphBuilder, TieBreak};
///
/// let graph: Graph<&str> = GraphBuilder::new()
///     .with_node_capacity(3)
///     .with_edge_capacity(3)
///     .with_tie_break(TieBreak::LatestFirst)
///     .build();
/// assert_eq!(graph.tie_break(), TieBreak::LatestFirst);
/// assert_eq!(graph.node_count(), 0);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphBuilder {
    node_capacity: usize,
    edge_capacity: usize,
    tie_break: TieBreak,
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{GraphBuilder, TieBreak};
    ///
    /// let builder = GraphBuilder::new();
    /// assert_eq!(builder.node_capacity(), 0);
    /// assert_eq!(builder.tie_break(), TieBreak::InsertionOrder);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `capacity` nodes.
    #[must_use]
    pub const fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Returns the configured node capacity hint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_capacity(&self) -> usize { self.node_capacity }

    /// Reserves room for `capacity` edges.
    #[must_use]
    pub const fn with_edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }

    /// Returns the configured edge capacity hint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_capacity(&self) -> usize { self.edge_capacity }

    /// Sets the tie-break policy inherited by every Kruskal iterator of the
    /// graph.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{GraphBuilder, TieBreak};
    ///
    /// let builder = GraphBuilder::new().with_tie_break(TieBreak::LatestFirst);
    /// assert_eq!(builder.tie_break(), TieBreak::LatestFirst);
    /// ```
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns the configured tie-break policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Constructs an empty graph with this configuration.
    #[must_use]
    pub fn build<T, W>(self) -> Graph<T, W> {
        Graph::from_builder(&self)
    }
}
