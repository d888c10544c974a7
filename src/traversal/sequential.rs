//! Single-threaded reference traversal.
//!
//! [`sequential_bfs`] is the oracle the parallel scheduler is checked against: same
//! inputs, same validation, same [`VisitationResult`] shape, no concurrency. Level sizes
//! and scanned-edge counts are deterministic and must match a parallel run exactly.

use std::{collections::VecDeque, time::Instant};

use crate::{
    graph::{Neighbors, NodeId},
    traversal::{TraversalStats, VisitState, VisitationResult},
    utils::BitSet,
    Error, Result,
};

/// Runs a breadth-first traversal from `root` on the calling thread.
///
/// The queue is processed one level at a time so that the per-level statistics line up
/// with those of [`TraversalScheduler`](crate::traversal::TraversalScheduler).
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `root` - External id of the start node
///
/// # Errors
///
/// - [`Error::InvalidRoot`] if `root` is outside `[0, node_count)`
/// - [`Error::GraphTooLarge`] if the mark set cannot be allocated
/// - [`Error::OutOfRange`] if the graph reports a neighbor outside its own node range
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the mark set and queue
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::GraphStore, traversal::sequential_bfs};
///
/// let graph = GraphStore::build([(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)], 5)?;
/// let result = sequential_bfs(&graph, 0)?;
///
/// assert_eq!(result.visited_count(), 4);
/// assert_eq!(result.level_sizes(), &[1, 2, 1]);
/// # Ok::<(), parbfs::Error>(())
/// ```
pub fn sequential_bfs<G>(graph: &G, root: i64) -> Result<VisitationResult>
where
    G: Neighbors + ?Sized,
{
    let node_count = graph.node_count();
    let root =
        NodeId::checked(root, node_count).ok_or(Error::InvalidRoot { root, node_count })?;

    let start = Instant::now();
    let too_large = || Error::GraphTooLarge { node_count };
    let mut marked = BitSet::try_new(node_count).map_err(|_| too_large())?;
    let mut queue = VecDeque::new();
    let mut stats = TraversalStats {
        workers: 1,
        ..TraversalStats::default()
    };

    marked.insert(root.index());
    queue.push_back(root);

    while !queue.is_empty() {
        let width = queue.len();
        stats.level_sizes.push(width);

        for node in queue.drain(..width).collect::<Vec<_>>() {
            let neighbors = graph.neighbors(node)?;
            stats.edges_scanned += neighbors.len();

            for &neighbor in neighbors {
                if neighbor.index() >= node_count {
                    return Err(Error::OutOfRange {
                        node: neighbor.index(),
                        node_count,
                    });
                }
                if marked.insert(neighbor.index()) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    let mut states = Vec::new();
    states
        .try_reserve_exact(node_count)
        .map_err(|_| too_large())?;
    states.extend((0..node_count).map(|index| {
        if marked.contains(index) {
            VisitState::Visited
        } else {
            VisitState::Unvisited
        }
    }));

    stats.elapsed = start.elapsed();
    log::debug!(
        "sequential traversal from {} visited {} node(s) in {} level(s)",
        root,
        marked.count(),
        stats.levels()
    );
    Ok(VisitationResult::new(root, states, stats, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{generate, GraphStore},
        test::{diamond_with_loop, ids},
    };

    #[test]
    fn test_diamond_scenario() {
        let result = sequential_bfs(&diamond_with_loop(), 0).unwrap();

        assert!(result.is_complete());
        assert_eq!(result.visited_nodes(), ids(&[0, 1, 2, 3]));
        assert_eq!(result.state(NodeId::new(4)), VisitState::Unvisited);
        assert_eq!(result.stats().workers, 1);
    }

    #[test]
    fn test_self_loop_only_component() {
        let result = sequential_bfs(&diamond_with_loop(), 4).unwrap();
        assert_eq!(result.visited_nodes(), ids(&[4]));
        assert_eq!(result.levels(), 1);
    }

    #[test]
    fn test_level_sizes_of_grid() {
        let graph = generate::grid(3, 3).into_graph().unwrap();
        let result = sequential_bfs(&graph, 0).unwrap();
        assert_eq!(result.level_sizes(), &[1, 2, 3, 2, 1]);
        // Every undirected edge is scanned from both ends
        assert_eq!(result.stats().edges_scanned, 2 * graph.edge_count());
    }

    #[test]
    fn test_invalid_root() {
        let graph = GraphStore::isolated(2).unwrap();
        assert!(matches!(
            sequential_bfs(&graph, 2),
            Err(Error::InvalidRoot { root: 2, node_count: 2 })
        ));
        assert!(matches!(
            sequential_bfs(&graph, i64::MIN),
            Err(Error::InvalidRoot { .. })
        ));
    }
}
