//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` so the benchmark entry points
//! report them once.

use kruskal_core::KruskalError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Draining the iterator during a warm-up check failed.
    #[error("Kruskal iteration failed: {0}")]
    Kruskal(#[from] KruskalError),
}
