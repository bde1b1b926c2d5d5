//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Graph, NodeId};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `names` and `(left, right, weight)` index triples.
///
/// Returns the graph together with the node handles in `names` order.
pub(crate) fn city_graph(
    names: &[&'static str],
    edges: &[(usize, usize, i64)],
) -> (Graph<&'static str>, Vec<NodeId>) {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = names.iter().map(|name| graph.add_node(*name)).collect();
    for &(left, right, weight) in edges {
        graph.add_edge(ids[left], ids[right], weight);
    }
    (graph, ids)
}
