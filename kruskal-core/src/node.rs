//! Graph nodes and the handles used to address them.

use std::fmt;

/// Handle identifying a node inside the [`crate::Graph`] that created it.
///
/// Handles compare by identity: two nodes carrying equal payloads still have
/// distinct handles. A handle is only meaningful for the graph (or
/// [`crate::DisjointSet`]) that issued it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the node in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A graph node carrying an immutable payload.
///
/// The node's disjoint-set links (`parent` and `rank`) live in the graph's
/// [`crate::DisjointSet`], addressed by [`Node::id`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<T> {
    id: NodeId,
    data: T,
}

impl<T> Node<T> {
    pub(crate) const fn new(id: NodeId, data: T) -> Self {
        Self { id, data }
    }

    /// Returns the handle identifying this node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> NodeId { self.id }

    /// Returns the payload supplied when the node was added.
    #[must_use]
    #[rustfmt::skip]
    pub const fn data(&self) -> &T { &self.data }
}

/// Renders a node through a caller-supplied payload formatter.
///
/// Representatives render as their payload alone. Any other node renders as
/// `payload (representative payload)`, which makes the current forest
/// structure visible in logs.
///
/// Obtained from [`crate::Graph::display_node`].
pub struct NodeDisplay<'a, T, F> {
    node: &'a Node<T>,
    representative: Option<&'a Node<T>>,
    format: F,
}

impl<'a, T, F> NodeDisplay<'a, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    pub(crate) const fn new(
        node: &'a Node<T>,
        representative: Option<&'a Node<T>>,
        format: F,
    ) -> Self {
        Self {
            node,
            representative,
            format,
        }
    }
}

impl<T, F> fmt::Display for NodeDisplay<'_, T, F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.format)(self.node.data(), f)?;
        if let Some(representative) = self.representative {
            f.write_str(" (")?;
            (self.format)(representative.data(), f)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<T, F> fmt::Debug for NodeDisplay<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDisplay")
            .field("node", &self.node.id())
            .field("representative", &self.representative.map(Node::id))
            .finish_non_exhaustive()
    }
}
