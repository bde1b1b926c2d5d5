//! Fixture types for Kruskal property tests.

use crate::{Graph, GraphBuilder, NodeId, TieBreak};

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Random pairs with weights drawn from a wide range.
    Mixed,
    /// Random pairs sharing a handful of weights, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning path plus a few extra edges.
    Sparse,
    /// Two halves with no edge between them.
    Disconnected,
}

/// A generated graph description.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// `(left, right, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, i64)>,
    /// Shape used during generation, reported on failure.
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Materialises the fixture as a graph using `tie_break`.
    pub(super) fn build(&self, tie_break: TieBreak) -> (Graph<usize>, Vec<NodeId>) {
        let mut graph = GraphBuilder::new()
            .with_node_capacity(self.node_count)
            .with_edge_capacity(self.edges.len())
            .with_tie_break(tie_break)
            .build();
        let ids: Vec<NodeId> = (0..self.node_count).map(|node| graph.add_node(node)).collect();
        for &(left, right, weight) in &self.edges {
            graph.add_edge(ids[left], ids[right], weight);
        }
        (graph, ids)
    }
}
