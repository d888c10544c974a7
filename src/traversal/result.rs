use strum::EnumCount;

use crate::{
    graph::NodeId,
    traversal::{TraversalStats, VisitState},
    utils::BitSet,
};

/// The outcome of a traversal: one [`VisitState`] per node plus run statistics.
///
/// For a completed traversal every node is either `Visited` (reachable from the root) or
/// `Unvisited`. A partial result, recovered from [`Error::Cancelled`](crate::Error::Cancelled),
/// may additionally hold `Enqueued` nodes that were discovered but not expanded.
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::{GraphStore, NodeId}, traversal};
///
/// let graph = GraphStore::build([(0, 1), (2, 3)], 4)?;
/// let result = traversal::run(&graph, 2, 2)?;
///
/// assert!(result.is_complete());
/// assert_eq!(result.visited_nodes(), vec![NodeId::new(2), NodeId::new(3)]);
/// assert_eq!(result.levels(), 2);
/// # Ok::<(), parbfs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct VisitationResult {
    root: NodeId,
    states: Vec<VisitState>,
    stats: TraversalStats,
    complete: bool,
}

impl VisitationResult {
    pub(crate) fn new(
        root: NodeId,
        states: Vec<VisitState>,
        stats: TraversalStats,
        complete: bool,
    ) -> Self {
        VisitationResult {
            root,
            states,
            stats,
            complete,
        }
    }

    /// Returns the root the traversal started from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns `true` if the traversal ran to termination, `false` for a partial result.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the number of nodes covered by this result.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the state of `node`; nodes outside the graph report `Unvisited`.
    #[must_use]
    pub fn state(&self, node: NodeId) -> VisitState {
        self.states
            .get(node.index())
            .copied()
            .unwrap_or(VisitState::Unvisited)
    }

    /// Returns `true` if `node` was fully expanded.
    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.state(node) == VisitState::Visited
    }

    /// Returns all per-node states, indexed by node.
    #[must_use]
    pub fn states(&self) -> &[VisitState] {
        &self.states
    }

    /// Returns the visited nodes in ascending order.
    #[must_use]
    pub fn visited_nodes(&self) -> Vec<NodeId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, &state)| state == VisitState::Visited)
            .map(|(index, _)| NodeId::new(index))
            .collect()
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.state_counts()[VisitState::Visited as usize]
    }

    /// Returns how many nodes are in each state, indexed by `VisitState as usize`.
    #[must_use]
    pub fn state_counts(&self) -> [usize; VisitState::COUNT] {
        let mut counts = [0; VisitState::COUNT];
        for &state in &self.states {
            counts[state as usize] += 1;
        }
        counts
    }

    /// Returns the set of nodes that were reached (`Enqueued` or `Visited`).
    #[must_use]
    pub fn reachable_set(&self) -> BitSet {
        let mut set = BitSet::new(self.states.len());
        for (index, state) in self.states.iter().enumerate() {
            if state.is_reached() {
                set.insert(index);
            }
        }
        set
    }

    /// Returns the number of levels expanded.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.stats.levels()
    }

    /// Returns the number of nodes expanded per level.
    #[must_use]
    pub fn level_sizes(&self) -> &[usize] {
        &self.stats.level_sizes
    }

    /// Returns the run statistics.
    #[must_use]
    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }
}
