//! Summary of a fully drained Kruskal traversal.

use std::iter::Sum;

use crate::Edge;

/// The output of draining a [`crate::KruskalIterator`].
///
/// Counts describe the subgraph formed by the emitted edges, so
/// `edges().len() == node_count() - component_count()` always holds. When the
/// iterator started from an untouched forest over a connected graph, the
/// result is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest<W = i64> {
    edges: Vec<Edge<W>>,
    component_count: usize,
    node_count: usize,
}

impl<W> SpanningForest<W> {
    pub(crate) const fn new(edges: Vec<Edge<W>>, component_count: usize, node_count: usize) -> Self {
        Self {
            edges,
            component_count,
            node_count,
        }
    }

    /// Returns the forest edges in emission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the number of components joined by the emitted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the summary and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

impl<W: Copy> SpanningForest<W> {
    /// Returns the sum of the forest's edge weights.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Graph;
    ///
    /// let mut graph: Graph<char> = Graph::new();
    /// let a = graph.add_node('a');
    /// let b = graph.add_node('b');
    /// let c = graph.add_node('c');
    /// graph.add_edge(a, b, 4);
    /// graph.add_edge(b, c, 1);
    /// graph.add_edge(a, c, 2);
    ///
    /// let forest = graph.kruskal_iter().into_forest()?;
    /// assert_eq!(forest.total_weight::<i64>(), 3);
    /// assert!(forest.is_tree());
    /// # Ok::<(), kruskal_core::KruskalError>(())
    /// ```
    #[must_use]
    pub fn total_weight<S>(&self) -> S
    where
        S: Sum<W>,
    {
        self.edges.iter().map(Edge::weight).sum()
    }
}
