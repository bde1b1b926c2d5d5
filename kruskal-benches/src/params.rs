//! Benchmark parameter labels.

use std::fmt;

/// Parameters identifying one graph size in a benchmark group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Random edges generated per node on top of the spanning path.
    pub edges_per_node: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.edges_per_node)
    }
}
