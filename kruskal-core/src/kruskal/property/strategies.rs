//! Strategy builders for Kruskal property tests.
//!
//! Each generator yields a [`GraphFixture`] whose edges reference nodes in
//! `0..node_count`. Self-loops and parallel edges are allowed since the
//! iterator must skip them like any other cycle-closing edge.

use proptest::{collection::vec, prelude::*};

use super::types::{GraphFixture, GraphShape};

/// Maximum node count for generated graphs.
const MAX_NODES: usize = 24;

/// Generates fixtures covering every [`GraphShape`], biased towards shared
/// weights since they exercise the tie-break order.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    prop_oneof![
        2 => random_pairs(GraphShape::Mixed, -500..500_i64),
        3 => random_pairs(GraphShape::ManyIdentical, 0..3_i64),
        2 => sparse(),
        2 => disconnected(),
    ]
}

fn random_pairs(
    shape: GraphShape,
    weights: std::ops::Range<i64>,
) -> impl Strategy<Value = GraphFixture> {
    (0..=MAX_NODES).prop_flat_map(move |node_count| {
        let max_edges = node_count.saturating_mul(3);
        let pairs = if node_count == 0 {
            Just(Vec::new()).boxed()
        } else {
            vec((0..node_count, 0..node_count, weights.clone()), 0..=max_edges).boxed()
        };
        pairs.prop_map(move |edges| GraphFixture {
            node_count,
            edges,
            shape,
        })
    })
}

fn sparse() -> impl Strategy<Value = GraphFixture> {
    (2..=MAX_NODES).prop_flat_map(|node_count| {
        let order = Just((0..node_count).collect::<Vec<_>>()).prop_shuffle();
        let path_weights = vec(1..100_i64, node_count - 1);
        let extras = vec((0..node_count, 0..node_count, 1..100_i64), 0..=node_count / 2);
        (order, path_weights, extras).prop_map(move |(order, path_weights, extras)| {
            let mut edges: Vec<(usize, usize, i64)> = order
                .windows(2)
                .zip(path_weights)
                .map(|(pair, weight)| (pair[0], pair[1], weight))
                .collect();
            edges.extend(extras);
            GraphFixture {
                node_count,
                edges,
                shape: GraphShape::Sparse,
            }
        })
    })
}

fn disconnected() -> impl Strategy<Value = GraphFixture> {
    (1..=MAX_NODES / 2, 1..=MAX_NODES / 2).prop_flat_map(|(left_size, right_size)| {
        let left = vec((0..left_size, 0..left_size, 0..20_i64), 0..=left_size * 2);
        let right = vec((0..right_size, 0..right_size, 0..20_i64), 0..=right_size * 2);
        (left, right).prop_map(move |(left, right)| {
            let shifted = right
                .into_iter()
                .map(|(a, b, weight)| (a + left_size, b + left_size, weight));
            GraphFixture {
                node_count: left_size + right_size,
                edges: left.into_iter().chain(shifted).collect(),
                shape: GraphShape::Disconnected,
            }
        })
    })
}
