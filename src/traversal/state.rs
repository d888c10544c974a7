//! Per-node visitation state shared by all traversal workers.
//!
//! Every node owns one [`AtomicU8`] cell holding a [`VisitState`]. The only contended
//! transition, `Unvisited -> Enqueued`, is a single compare-and-swap on that cell, so
//! concurrent workers can race on the same neighbor and exactly one of them wins. No lock
//! ever spans more than one node.

use std::sync::atomic::{AtomicU8, Ordering};

use strum::{EnumCount, EnumIter};

use crate::{graph::NodeId, Error, Result};

const UNVISITED: u8 = VisitState::Unvisited as u8;
const ENQUEUED: u8 = VisitState::Enqueued as u8;
const VISITED: u8 = VisitState::Visited as u8;

/// The visitation state of a single node.
///
/// A node moves `Unvisited -> Enqueued -> Visited`, each step at most once per traversal.
///
/// - **`Unvisited`**: never discovered
/// - **`Enqueued`**: claimed by a worker and placed on a frontier, neighbors not yet expanded
/// - **`Visited`**: neighbors expanded
///
/// After a traversal completes, no node is left `Enqueued`. Partial results of a cancelled
/// traversal may still contain `Enqueued` nodes (the pending frontier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum VisitState {
    /// Never discovered
    Unvisited = 0,
    /// Discovered and on a frontier, not yet expanded
    Enqueued = 1,
    /// Fully expanded
    Visited = 2,
}

impl VisitState {
    #[inline]
    fn from_raw(raw: u8) -> Self {
        match raw {
            UNVISITED => VisitState::Unvisited,
            ENQUEUED => VisitState::Enqueued,
            _ => VisitState::Visited,
        }
    }

    /// Returns `true` for `Enqueued` and `Visited`, i.e. the node has been claimed.
    #[must_use]
    pub fn is_reached(self) -> bool {
        self != VisitState::Unvisited
    }
}

/// Shared three-state marks for every node of one traversal.
///
/// # Synchronization
///
/// - [`VisitationState::try_claim`] is an `AcqRel` compare-and-swap and the only way a node
///   may enter a frontier
/// - [`VisitationState::mark_visited`] is a `Release` store performed by the single worker
///   that owns the node's expansion; the level barrier makes it visible to everyone
///
/// # Panics
///
/// All per-node methods index the cell array directly and panic for a node outside
/// `[0, len)`. The scheduler range-checks neighbor identifiers before calling them.
#[derive(Debug)]
pub struct VisitationState {
    cells: Vec<AtomicU8>,
}

impl VisitationState {
    /// Creates the state for `node_count` nodes, all `Unvisited`.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        VisitationState {
            cells: (0..node_count).map(|_| AtomicU8::new(UNVISITED)).collect(),
        }
    }

    /// Creates the state for `node_count` nodes, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphTooLarge`] if the cell array cannot be allocated.
    pub fn try_new(node_count: usize) -> Result<Self> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(node_count)
            .map_err(|_| Error::GraphTooLarge { node_count })?;
        cells.extend((0..node_count).map(|_| AtomicU8::new(UNVISITED)));
        Ok(VisitationState { cells })
    }

    /// Returns the number of nodes tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no nodes are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Attempts the `Unvisited -> Enqueued` transition for `node`.
    ///
    /// # Returns
    ///
    /// `true` if and only if this call performed the transition. Across all concurrent
    /// callers at most one call per node returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parbfs::{graph::NodeId, traversal::{VisitState, VisitationState}};
    ///
    /// let state = VisitationState::new(2);
    /// assert!(state.try_claim(NodeId::new(1)));
    /// assert!(!state.try_claim(NodeId::new(1)));
    /// assert_eq!(state.state(NodeId::new(1)), VisitState::Enqueued);
    /// ```
    #[inline]
    pub fn try_claim(&self, node: NodeId) -> bool {
        self.cells[node.index()]
            .compare_exchange(UNVISITED, ENQUEUED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Performs the `Enqueued -> Visited` transition for `node`.
    ///
    /// Only the worker expanding `node` may call this, so no compare-and-swap is needed.
    #[inline]
    pub fn mark_visited(&self, node: NodeId) {
        let previous = self.cells[node.index()].swap(VISITED, Ordering::Release);
        debug_assert_eq!(
            previous, ENQUEUED,
            "node {node} marked visited without being enqueued"
        );
    }

    /// Returns the current state of `node`.
    #[must_use]
    #[inline]
    pub fn state(&self, node: NodeId) -> VisitState {
        VisitState::from_raw(self.cells[node.index()].load(Ordering::Acquire))
    }

    /// Returns the number of nodes that have been claimed (`Enqueued` or `Visited`).
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.load(Ordering::Acquire) != UNVISITED)
            .count()
    }

    /// Consumes the state and returns the plain per-node values.
    #[must_use]
    pub fn into_states(self) -> Vec<VisitState> {
        self.cells
            .into_iter()
            .map(|cell| VisitState::from_raw(cell.into_inner()))
            .collect()
    }
}
