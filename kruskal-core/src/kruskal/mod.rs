//! Lazy Kruskal traversal producing minimum-spanning-forest edges.
//!
//! A [`KruskalIterator`] copies the graph's edges into a min-heap when it is
//! created and then pulls them in non-decreasing weight order. An edge is
//! emitted only when its endpoints sit in different disjoint sets; emitting it
//! merges those sets in the forest shared with the graph. The emitted sequence
//! is therefore an execution trace of Kruskal's algorithm and spans every
//! connected component, producing a forest on disconnected graphs.
//!
//! Every call first compares the graph's modification counter with the value
//! captured at creation and fails fast when they differ.

mod forest;

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    iter::FusedIterator,
};

use tracing::{debug, instrument, trace, warn};

use crate::{
    Edge, KruskalError, Result, TieBreak,
    graph::{ModificationCounter, SharedForest},
};

pub use self::forest::SpanningForest;

/// Heap entry ordering edges by weight, then by the tie-break key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct QueuedEdge<W> {
    order: usize,
    edge: Edge<W>,
}

impl<W: Ord + Copy> Ord for QueuedEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.edge
            .cmp_weight(&other.edge)
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl<W: Ord + Copy> PartialOrd for QueuedEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot iterator over the minimum-spanning-forest edges of a
/// [`crate::Graph`].
///
/// The iterator is in one of two states: an edge is pending, or it is
/// exhausted. The first pending edge is located eagerly on creation.
///
/// Use [`KruskalIterator::has_next`] and [`KruskalIterator::next_edge`] for
/// explicit control, or the [`Iterator`] implementation, which yields
/// `Result<Edge<W>, KruskalError>` items and fuses after it is exhausted or
/// has reported a concurrent modification.
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, KruskalError};
///
/// let mut graph = Graph::new();
/// let boston = graph.add_node("Boston");
/// let sf = graph.add_node("San Francisco");
/// graph.add_edge(boston, sf, 1);
///
/// let mut iter = graph.kruskal_iter();
/// assert!(iter.has_next()?);
/// let edge = iter.next_edge()?;
/// assert_eq!((edge.node1(), edge.node2(), edge.weight()), (boston, sf, 1));
/// assert!(!iter.has_next()?);
/// assert_eq!(iter.next_edge(), Err(KruskalError::Exhausted));
/// # Ok::<(), KruskalError>(())
/// ```
#[derive(Debug)]
pub struct KruskalIterator<W = i64> {
    queue: BinaryHeap<Reverse<QueuedEdge<W>>>,
    pending: Option<Edge<W>>,
    emitted: Vec<Edge<W>>,
    forest: SharedForest,
    modifications: ModificationCounter,
    expected_modifications: u64,
    fused: bool,
}

impl<W: Ord + Copy> KruskalIterator<W> {
    #[instrument(
        name = "kruskal.iter",
        level = "debug",
        skip_all,
        fields(
            edges = edges.len(),
            modification_count = modifications.get(),
            tie_break = ?tie_break,
        ),
    )]
    pub(crate) fn new(
        edges: &[Edge<W>],
        forest: SharedForest,
        modifications: ModificationCounter,
        tie_break: TieBreak,
    ) -> Self {
        let queue = edges
            .iter()
            .map(|edge| {
                Reverse(QueuedEdge {
                    order: tie_break.order_key(edge.sequence()),
                    edge: *edge,
                })
            })
            .collect();
        let expected_modifications = modifications.get();
        let mut iter = Self {
            queue,
            pending: None,
            emitted: Vec::new(),
            forest,
            modifications,
            expected_modifications,
            fused: false,
        };
        iter.advance();
        iter
    }

    /// Returns `true` when another forest edge is available.
    ///
    /// # Errors
    /// Returns [`KruskalError::ConcurrentModification`] when the graph gained
    /// a node or an edge after this iterator was created.
    pub fn has_next(&self) -> Result<bool> {
        self.check_modifications()?;
        Ok(self.pending.is_some())
    }

    /// Returns the next forest edge and merges its endpoints' sets.
    ///
    /// # Errors
    /// Returns [`KruskalError::ConcurrentModification`] when the graph gained
    /// a node or an edge after this iterator was created, and
    /// [`KruskalError::Exhausted`] when no forest edge remains.
    pub fn next_edge(&mut self) -> Result<Edge<W>> {
        self.check_modifications()?;
        let edge = self.pending.take().ok_or(KruskalError::Exhausted)?;
        self.forest.borrow_mut().union(edge.node1(), edge.node2());
        debug!(
            node1 = %edge.node1(),
            node2 = %edge.node2(),
            sequence = edge.sequence(),
            "accepted forest edge"
        );
        self.emitted.push(edge);
        self.advance();
        Ok(edge)
    }

    /// Returns the number of edges not yet examined, including the pending
    /// one. This is an upper bound on the edges still to be emitted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len() + usize::from(self.pending.is_some())
    }

    /// Drains the iterator and summarises every edge it has emitted,
    /// including edges pulled before this call.
    ///
    /// The component count is derived from the emitted edges alone: each one
    /// joined two components, so the count is the node count minus the
    /// emitted edges. On a graph whose forest held no unions when the
    /// iterator was created, this matches [`crate::Graph::component_count`].
    /// Unions made earlier by another iterator or by [`crate::Graph::union`]
    /// are not counted.
    ///
    /// # Errors
    /// Returns [`KruskalError::ConcurrentModification`] when the graph was
    /// modified after this iterator was created.
    pub fn into_forest(mut self) -> Result<SpanningForest<W>> {
        while self.has_next()? {
            self.next_edge()?;
        }
        let node_count = self.forest.borrow().len();
        let component_count = node_count.saturating_sub(self.emitted.len());
        Ok(SpanningForest::new(self.emitted, component_count, node_count))
    }

    fn advance(&mut self) {
        let forest = self.forest.borrow();
        while let Some(Reverse(queued)) = self.queue.pop() {
            let edge = queued.edge;
            if forest.same_set(edge.node1(), edge.node2()) {
                trace!(
                    sequence = edge.sequence(),
                    "skipping edge that would close a cycle"
                );
                continue;
            }
            self.pending = Some(edge);
            return;
        }
        self.pending = None;
    }

    fn check_modifications(&self) -> Result<()> {
        let found = self.modifications.get();
        if found == self.expected_modifications {
            return Ok(());
        }
        warn!(
            expected = self.expected_modifications,
            found, "graph modified while a Kruskal iterator was outstanding"
        );
        Err(KruskalError::ConcurrentModification {
            expected: self.expected_modifications,
            found,
        })
    }
}

impl<W: Ord + Copy> Iterator for KruskalIterator<W> {
    type Item = Result<Edge<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.has_next() {
            Ok(true) => Some(self.next_edge()),
            Ok(false) => {
                self.fused = true;
                None
            }
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.fused {
            return (0, Some(0));
        }
        // A concurrent modification surfaces as one extra `Err` item.
        (
            usize::from(self.pending.is_some()),
            Some(self.remaining().max(1)),
        )
    }
}

impl<W: Ord + Copy> FusedIterator for KruskalIterator<W> {}


#[cfg(test)]
mod property;
