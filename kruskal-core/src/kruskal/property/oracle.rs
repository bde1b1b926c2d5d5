//! Sequential Kruskal oracle for property verification.
//!
//! Sorts edge indices by `(weight, tie-break key)` and accepts every edge
//! joining two different components, tracked with a plain path-halving
//! union-find independent of the crate's own forest.

use crate::TieBreak;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Insertion indices of the accepted edges, in acceptance order.
    pub accepted: Vec<usize>,
    /// Number of connected components after all edges are processed.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over `(left, right, weight)` triples.
pub(super) fn sequential_kruskal(
    node_count: usize,
    edges: &[(usize, usize, i64)],
    tie_break: TieBreak,
) -> OracleForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&left, &right| {
        edges[left].2.cmp(&edges[right].2).then_with(|| match tie_break {
            TieBreak::InsertionOrder => left.cmp(&right),
            TieBreak::LatestFirst => right.cmp(&left),
        })
    });

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut component_count = node_count;
    let mut accepted = Vec::new();

    for index in order {
        let (left, right, _) = edges[index];
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
            component_count -= 1;
            accepted.push(index);
        }
    }

    OracleForest {
        accepted,
        component_count,
    }
}

/// Path-halving find used by the oracle and forest validators.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_skips_cycle_closing_edges() {
        let edges = [(0, 2, 2), (1, 2, 3), (1, 0, 4)];
        let forest = sequential_kruskal(3, &edges, TieBreak::InsertionOrder);
        assert_eq!(forest.accepted, [0, 1]);
        assert_eq!(forest.component_count, 1);
    }

    #[test]
    fn oracle_honours_latest_first_ties() {
        let edges = [(0, 1, 1), (0, 1, 1)];
        let forest = sequential_kruskal(2, &edges, TieBreak::LatestFirst);
        assert_eq!(forest.accepted, [1]);
    }

    #[test]
    fn oracle_counts_isolated_nodes_as_components() {
        let forest = sequential_kruskal(4, &[(0, 1, 5)], TieBreak::InsertionOrder);
        assert_eq!(forest.component_count, 3);
    }
}
