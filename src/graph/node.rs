//! Node identifier for graph stores.
//!
//! [`NodeId`] is a strongly-typed index into every per-node array of a traversal: the
//! adjacency offsets of a [`GraphStore`](crate::graph::GraphStore), the visitation cells
//! and the final result. The newtype keeps node indices from being confused with counts,
//! levels or other integers flowing through the scheduler.

use std::fmt;

/// A strongly-typed identifier for nodes within an undirected graph.
///
/// `NodeId` wraps a `usize` index in `[0, node_count)`. Identifiers coming from external
/// input are signed (`i64`) so that negative values can be expressed and rejected; use
/// [`NodeId::checked`] to validate them against a node count.
///
/// # Examples
///
/// ```rust
/// use parbfs::graph::NodeId;
///
/// let node = NodeId::checked(3, 5).unwrap();
/// assert_eq!(node.index(), 3);
///
/// assert!(NodeId::checked(-1, 5).is_none());
/// assert!(NodeId::checked(5, 5).is_none());
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`], so frontiers can move them between
/// workers freely.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// No range check is performed; the index is validated when it is used against a
    /// graph.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Validates an externally supplied identifier against `node_count`.
    ///
    /// # Returns
    ///
    /// `Some(NodeId)` if `0 <= raw < node_count`, `None` otherwise.
    #[must_use]
    #[inline]
    pub fn checked(raw: i64, node_count: usize) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .filter(|&index| index < node_count)
            .map(NodeId)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Displays the bare index, matching the numbering of the input edge list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
