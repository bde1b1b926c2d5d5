//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph contains a random spanning path, so the full forest
//! is always a single tree, plus `edges_per_node` random extra edges per node.
//! Extra edges may repeat endpoints or form self-loops; both exercise the
//! cycle-skipping path of the iterator.

use kruskal_core::{Graph, GraphBuilder, NodeId, TieBreak};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors raised while validating a [`SyntheticConfig`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// No nodes were requested.
    #[error("node_count must be greater than zero")]
    ZeroNodes,
    /// The weight range is empty.
    #[error("max_weight must be positive, got {max_weight}")]
    EmptyWeightRange {
        /// Requested inclusive upper bound.
        max_weight: i64,
    },
    /// The requested edge count does not fit in `usize`.
    #[error("{node_count} nodes with {edges_per_node} edges each overflows usize")]
    EdgeCountOverflow {
        /// Requested node count.
        node_count: usize,
        /// Requested extra edges per node.
        edges_per_node: usize,
    },
}

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntheticConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Random edges added per node on top of the spanning path.
    pub edges_per_node: usize,
    /// Inclusive upper bound for edge weights; the lower bound is one.
    pub max_weight: i64,
    /// RNG seed.
    pub seed: u64,
}

/// An edge list over `0..node_count`, ready to load into a [`Graph`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<(usize, usize, i64)>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is unusable.
    ///
    /// # Examples
    /// ```
    /// use kruskal_benches::source::{SyntheticConfig, SyntheticGraph};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticConfig {
    ///     node_count: 10,
    ///     edges_per_node: 2,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edge_count(), 9 + 20);
    /// # Ok::<(), kruskal_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let extra = validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let mut order: Vec<usize> = (0..config.node_count).collect();
        order.shuffle(&mut rng);
        let mut edges = Vec::with_capacity(config.node_count.saturating_sub(1).saturating_add(extra));
        for pair in order.windows(2) {
            if let &[left, right] = pair {
                edges.push((left, right, rng.gen_range(1..=config.max_weight)));
            }
        }
        for _ in 0..extra {
            let left = rng.gen_range(0..config.node_count);
            let right = rng.gen_range(0..config.node_count);
            edges.push((left, right, rng.gen_range(1..=config.max_weight)));
        }
        edges.shuffle(&mut rng);

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Number of nodes the graph will contain.
    #[rustfmt::skip]
    #[must_use]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Number of generated edges, including the spanning path.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edge_count(&self) -> usize { self.edges.len() }

    /// Loads the edge list into a fresh graph whose payloads are node indices.
    #[must_use]
    pub fn build(&self, tie_break: TieBreak) -> Graph<usize> {
        let mut graph = GraphBuilder::new()
            .with_node_capacity(self.node_count)
            .with_edge_capacity(self.edges.len())
            .with_tie_break(tie_break)
            .build();
        let ids: Vec<NodeId> = (0..self.node_count).map(|index| graph.add_node(index)).collect();
        for &(left, right, weight) in &self.edges {
            if let (Some(&left), Some(&right)) = (ids.get(left), ids.get(right)) {
                graph.add_edge(left, right, weight);
            }
        }
        graph
    }
}

fn validate(config: &SyntheticConfig) -> Result<usize, SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::EmptyWeightRange {
            max_weight: config.max_weight,
        });
    }
    config
        .node_count
        .checked_mul(config.edges_per_node)
        .ok_or(SyntheticError::EdgeCountOverflow {
            node_count: config.node_count,
            edges_per_node: config.edges_per_node,
        })
}
