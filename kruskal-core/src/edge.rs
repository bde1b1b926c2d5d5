//! Undirected weighted edges.

use std::cmp::Ordering;

use crate::NodeId;

/// An undirected edge between two nodes of the same graph.
///
/// Edges do not own their endpoints; the [`crate::Graph`] does. Edges compare
/// by weight alone through [`Edge::cmp_weight`]; equality still covers every
/// field, so `Edge` does not implement [`Ord`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W = i64> {
    node1: NodeId,
    node2: NodeId,
    weight: W,
    sequence: usize,
}

impl<W> Edge<W> {
    pub(crate) const fn new(node1: NodeId, node2: NodeId, weight: W, sequence: usize) -> Self {
        Self {
            node1,
            node2,
            weight,
            sequence,
        }
    }

    /// Returns the first endpoint given when the edge was added.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node1(&self) -> NodeId { self.node1 }

    /// Returns the second endpoint given when the edge was added.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node2(&self) -> NodeId { self.node2 }

    /// Returns both endpoints as `(node1, node2)`.
    #[must_use]
    pub const fn endpoints(&self) -> (NodeId, NodeId) {
        (self.node1, self.node2)
    }

    /// Returns the position of the edge in the graph's insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> usize { self.sequence }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W: Ord> Edge<W> {
    /// Compares two edges by weight only, smaller weights first.
    ///
    /// Edges of equal weight compare as [`Ordering::Equal`] whatever their
    /// endpoints or sequence; the iterator's [`crate::TieBreak`] orders them.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use kruskal_core::Graph;
    ///
    /// let mut graph: Graph<char> = Graph::new();
    /// let a = graph.add_node('a');
    /// let b = graph.add_node('b');
    /// let light = graph.add_edge(a, b, 1);
    /// let heavy = graph.add_edge(b, a, 5);
    /// let twin = graph.add_edge(a, b, 5);
    ///
    /// assert_eq!(light.cmp_weight(&heavy), Ordering::Less);
    /// assert_eq!(heavy.cmp_weight(&twin), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}
