//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter labels used by the Criterion
//! benchmarks of the lazy Kruskal iterator.

pub mod error;
pub mod params;
pub mod source;
