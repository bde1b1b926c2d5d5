//! Undirected weighted graph owning its nodes, edges, and disjoint-set forest.
//!
//! The forest and the modification counter are shared with every
//! [`KruskalIterator`] the graph hands out. Iterators merge node sets in place,
//! so their progress is visible through [`Graph::find`], and they compare the
//! counter on every call to detect nodes or edges added after their creation.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use tracing::trace;

use crate::{
    Edge, GraphBuilder, KruskalIterator, Node, NodeDisplay, NodeId, TieBreak,
    union_find::DisjointSet,
};

/// Disjoint-set forest shared between a graph and its iterators.
pub(crate) type SharedForest = Rc<RefCell<DisjointSet>>;

/// Structural modification counter shared between a graph and its iterators.
pub(crate) type ModificationCounter = Rc<Cell<u64>>;

/// An undirected weighted graph with insertion-ordered nodes and edges.
///
/// `T` is the node payload and needs no capabilities. `W` is the edge weight;
/// Kruskal iteration requires `W: Ord + Copy`.
///
/// # Examples
/// ```
/// use kruskal_core::Graph;
///
/// let mut graph = Graph::new();
/// let boston = graph.add_node("Boston");
/// let sf = graph.add_node("San Francisco");
/// let chicago = graph.add_node("Chicago");
/// graph.add_edge(boston, chicago, 2);
/// graph.add_edge(sf, chicago, 3);
/// graph.add_edge(sf, boston, 4);
///
/// let weights: Vec<i64> = graph
///     .kruskal_iter()
///     .map(|edge| edge.map(|edge| edge.weight()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(weights, [2, 3]);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub struct Graph<T, W = i64> {
    nodes: Vec<Node<T>>,
    edges: Vec<Edge<W>>,
    forest: SharedForest,
    modifications: ModificationCounter,
    tie_break: TieBreak,
}

impl<T, W> Default for Graph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        GraphBuilder::new().build()
    }

    pub(crate) fn from_builder(builder: &GraphBuilder) -> Self {
        Self {
            nodes: Vec::with_capacity(builder.node_capacity()),
            edges: Vec::with_capacity(builder.edge_capacity()),
            forest: Rc::new(RefCell::new(DisjointSet::with_capacity(
                builder.node_capacity(),
            ))),
            modifications: Rc::new(Cell::new(0)),
            tie_break: builder.tie_break(),
        }
    }

    /// Adds a node wrapping `data` and returns its handle.
    ///
    /// Duplicate payloads are permitted; every call creates a distinct node.
    pub fn add_node(&mut self, data: T) -> NodeId {
        let id = self.forest.borrow_mut().make_set();
        self.nodes.push(Node::new(id, data));
        self.record_modification();
        id
    }

    /// Adds an undirected edge between `node1` and `node2`.
    ///
    /// Endpoints are not validated; handles from another graph are treated as
    /// isolated nodes by the forest.
    pub fn add_edge(&mut self, node1: NodeId, node2: NodeId, weight: W) -> Edge<W>
    where
        W: Copy,
    {
        let edge = Edge::new(node1, node2, weight, self.edges.len());
        self.edges.push(edge);
        self.record_modification();
        edge
    }

    /// Returns the nodes in the order they were added.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node<T>] { &self.nodes }

    /// Returns the edges in the order they were added.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the node identified by `id`, if it belongs to this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns how many nodes and edges have been added so far.
    #[must_use]
    pub fn modification_count(&self) -> u64 {
        self.modifications.get()
    }

    /// Returns the tie-break policy handed to new Kruskal iterators.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the representative of the set containing `node`.
    #[must_use]
    pub fn find(&self, node: NodeId) -> NodeId {
        self.forest.borrow().find(node)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged. Iterators created
    /// earlier observe the merge and will skip edges it makes redundant.
    pub fn union(&self, left: NodeId, right: NodeId) -> bool {
        self.forest.borrow_mut().union(left, right)
    }

    /// Returns `true` when both nodes currently share a representative.
    #[must_use]
    pub fn same_set(&self, left: NodeId, right: NodeId) -> bool {
        self.forest.borrow().same_set(left, right)
    }

    /// Returns the stored parent link of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.forest.borrow().parent(node)
    }

    /// Returns the union-by-rank rank of `node`.
    #[must_use]
    pub fn rank(&self, node: NodeId) -> u32 {
        self.forest.borrow().rank(node)
    }

    /// Returns the number of disjoint sets the nodes currently form.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.forest.borrow().component_count()
    }

    /// Returns a [`fmt::Display`] adapter rendering `id` through `format`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// let boston = graph.add_node("Boston");
    /// let sf = graph.add_node("San Francisco");
    /// graph.union(boston, sf);
    ///
    /// let render = |data: &&str, f: &mut std::fmt::Formatter<'_>| f.write_str(data);
    /// let shown = graph.display_node(sf, render).map(|node| node.to_string());
    /// assert_eq!(shown.as_deref(), Some("San Francisco (Boston)"));
    /// ```
    #[must_use]
    pub fn display_node<F>(&self, id: NodeId, format: F) -> Option<NodeDisplay<'_, T, F>>
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let node = self.node(id)?;
        let representative = self.find(id);
        let representative = if representative == id {
            None
        } else {
            self.node(representative)
        };
        Some(NodeDisplay::new(node, representative, format))
    }

    /// Returns an iterator yielding minimum-spanning-forest edges in
    /// non-decreasing weight order.
    ///
    /// The iterator snapshots the current edge list. Adding nodes or edges
    /// afterwards makes its next call fail with
    /// [`crate::KruskalError::ConcurrentModification`]. Node sets are shared,
    /// so the unions it performs persist in this graph.
    #[must_use]
    pub fn kruskal_iter(&self) -> KruskalIterator<W>
    where
        W: Ord + Copy,
    {
        KruskalIterator::new(
            &self.edges,
            Rc::clone(&self.forest),
            Rc::clone(&self.modifications),
            self.tie_break,
        )
    }

    fn record_modification(&self) {
        let count = self.modifications.get().saturating_add(1);
        self.modifications.set(count);
        trace!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            modification_count = count,
            "graph modified"
        );
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for Graph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("modification_count", &self.modifications.get())
            .field("tie_break", &self.tie_break)
            .finish_non_exhaustive()
    }
}
