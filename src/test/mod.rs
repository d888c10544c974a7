//! Shared fixtures for unit tests.

use crate::graph::{GraphStore, NodeId};

/// Nodes `0..5`, edges (0,1) (0,2) (1,3) (2,3) (4,4).
///
/// From root 0 the levels are `{0}`, `{1, 2}`, `{3}`; node 4 only reaches itself.
pub fn diamond_with_loop() -> GraphStore {
    GraphStore::build([(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)], 5).unwrap()
}

/// Converts raw indices into node ids.
pub fn ids(indices: &[usize]) -> Vec<NodeId> {
    indices.iter().copied().map(NodeId::new).collect()
}
