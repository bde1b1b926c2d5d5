//! Property-based tests for the lazy Kruskal iterator.
//!
//! Checks the emitted edge sequence against a sequential oracle, validates
//! forest invariants (ordering, acyclicity, edge count), and verifies that
//! structural mutation is detected at any point of the traversal.

mod oracle;
mod strategies;
mod types;
