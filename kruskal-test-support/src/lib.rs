//! Shared test utilities for the kruskal workspace crates.

pub mod ci;
pub mod tracing;
