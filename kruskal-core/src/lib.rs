//! Kruskal core library.
//!
//! Provides a generic undirected graph whose nodes double as disjoint-set
//! elements, and a lazy [`KruskalIterator`] streaming the graph's minimum
//! spanning forest one edge at a time in non-decreasing weight order.
//!
//! Iterators fail fast: adding a node or an edge to the graph after an
//! iterator was created makes that iterator's next call return
//! [`KruskalError::ConcurrentModification`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod error;
mod graph;
mod kruskal;
mod node;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    builder::{GraphBuilder, TieBreak},
    edge::Edge,
    error::{KruskalError, KruskalErrorCode, Result},
    graph::Graph,
    kruskal::{KruskalIterator, SpanningForest},
    node::{Node, NodeDisplay, NodeId},
    union_find::DisjointSet,
};
