//! Multi-producer frontier queue.
//!
//! The frontier collects nodes discovered during one level. Producers append through a
//! shared reference while the level is being expanded; the scheduler then takes the whole
//! contents through [`Frontier::drain`], which needs exclusive access. The borrow checker
//! therefore guarantees that draining never overlaps with pushing.

use crate::graph::NodeId;

/// An unordered, lock-free, append-only set of discovered nodes.
///
/// Backed by [`boxcar::Vec`], whose `push` takes `&self` and never blocks. No ordering is
/// kept between nodes pushed in the same level.
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::NodeId, traversal::Frontier};
///
/// let mut frontier = Frontier::new();
/// std::thread::scope(|s| {
///     s.spawn(|| frontier.push(NodeId::new(1)));
///     s.spawn(|| frontier.push(NodeId::new(2)));
/// });
///
/// let mut level = frontier.drain();
/// level.sort();
/// assert_eq!(level, vec![NodeId::new(1), NodeId::new(2)]);
/// assert!(frontier.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Frontier {
    nodes: boxcar::Vec<NodeId>,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Frontier {
            nodes: boxcar::Vec::new(),
        }
    }

    /// Creates a frontier holding only `root`.
    #[must_use]
    pub fn with_root(root: NodeId) -> Self {
        let frontier = Frontier::new();
        frontier.push(root);
        frontier
    }

    /// Appends `node`. Safe to call from any number of threads at once.
    #[inline]
    pub fn push(&self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Returns the number of nodes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.count()
    }

    /// Returns `true` if the frontier holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties the frontier and returns its previous contents.
    pub fn drain(&mut self) -> Vec<NodeId> {
        let nodes = std::mem::take(&mut self.nodes);
        nodes.iter().map(|(_, &node)| node).collect()
    }
}
