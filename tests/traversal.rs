//! Integration tests for the parallel traversal against the sequential reference.
//!
//! Each fixture graph is traversed with several worker counts; the visited set, the
//! per-level sizes and the scanned-edge count must be identical to `sequential_bfs`.

use std::collections::BTreeSet;

use parbfs::{
    graph::{generate, EdgeList, GraphStore, NodeId},
    prelude::*,
    traversal::{self, SchedulerPhase},
};
use proptest::prelude::*;

const WORKER_COUNTS: [usize; 3] = [1, 2, 8];

fn visited_set(result: &VisitationResult) -> BTreeSet<usize> {
    result.visited_nodes().iter().map(|n| n.index()).collect()
}

/// Runs every worker count with single-node chunks to force work splitting.
fn assert_matches_reference(graph: &GraphStore, root: i64) -> Result<()> {
    let reference = sequential_bfs(graph, root)?;

    for workers in WORKER_COUNTS {
        let config = TraversalConfig::with_workers(workers).with_min_chunk(1);
        let result = TraversalScheduler::new(graph, config)?.run(root)?;

        assert!(result.is_complete());
        assert_eq!(
            visited_set(&result),
            visited_set(&reference),
            "visited set differs with {workers} worker(s)"
        );
        assert_eq!(result.level_sizes(), reference.level_sizes());
        assert_eq!(result.stats().edges_scanned, reference.stats().edges_scanned);
        assert_eq!(result.state_counts()[VisitState::Enqueued as usize], 0);
    }
    Ok(())
}

/// Every neighbor of a visited node must be visited too.
fn assert_closed(graph: &GraphStore, result: &VisitationResult) -> Result<()> {
    for node in result.visited_nodes() {
        for &neighbor in graph.neighbors(node)? {
            assert!(result.is_visited(neighbor), "{neighbor} missed from {node}");
        }
    }
    Ok(())
}

#[test]
fn test_diamond_with_self_loop() -> Result<()> {
    let graph = GraphStore::build([(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)], 5)?;

    for workers in WORKER_COUNTS {
        let result = traversal::run(&graph, 0, workers)?;
        assert_eq!(visited_set(&result), BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(result.state(NodeId::new(4)), VisitState::Unvisited);
    }
    assert_matches_reference(&graph, 0)
}

#[test]
fn test_single_isolated_node() -> Result<()> {
    let graph = GraphStore::isolated(1)?;
    let result = traversal::run(&graph, 0, 4)?;

    assert_eq!(visited_set(&result), BTreeSet::from([0]));
    assert_eq!(result.levels(), 1);
    assert_matches_reference(&graph, 0)
}

#[test]
fn test_empty_graph_rejects_every_root() {
    let graph = GraphStore::isolated(0).unwrap();
    assert!(matches!(
        traversal::run(&graph, 0, 2),
        Err(Error::InvalidRoot { root: 0, node_count: 0 })
    ));
    assert!(matches!(
        sequential_bfs(&graph, 0),
        Err(Error::InvalidRoot { .. })
    ));
}

#[test]
fn test_path_of_five() -> Result<()> {
    let graph = generate::path(5).into_graph()?;
    let result = traversal::run(&graph, 0, 2)?;

    assert_eq!(result.visited_count(), 5);
    assert_eq!(result.level_sizes(), &[1, 1, 1, 1, 1]);

    // From the middle the path is explored in both directions
    let middle = traversal::run(&graph, 2, 2)?;
    assert_eq!(middle.level_sizes(), &[1, 2, 2]);

    assert_matches_reference(&graph, 0)?;
    assert_matches_reference(&graph, 2)
}

#[test]
fn test_complete_graph() -> Result<()> {
    let graph = generate::complete(10).into_graph()?;
    let result = traversal::run(&graph, 3, 8)?;

    assert_eq!(result.visited_count(), 10);
    assert_eq!(result.level_sizes(), &[1, 9]);
    assert_eq!(result.stats().edges_scanned, 90);
    assert_matches_reference(&graph, 3)
}

#[test]
fn test_duplicates_and_self_loops_are_idempotent() -> Result<()> {
    let plain = GraphStore::build([(0, 1), (1, 2)], 3)?;
    let noisy = GraphStore::build([(0, 1), (1, 0), (0, 1), (1, 2), (2, 2), (1, 1)], 3)?;

    let expected = traversal::run(&plain, 0, 4)?;
    for workers in WORKER_COUNTS {
        let result = traversal::run(&noisy, 0, workers)?;
        assert_eq!(result.states(), expected.states());
        assert_eq!(result.level_sizes(), expected.level_sizes());
    }
    assert_matches_reference(&noisy, 0)
}

#[test]
fn test_two_components() -> Result<()> {
    let graph = generate::disjoint_union(generate::path(4), &generate::complete(3)).into_graph()?;

    let first = traversal::run(&graph, 1, 4)?;
    assert_eq!(visited_set(&first), BTreeSet::from([0, 1, 2, 3]));

    let second = traversal::run(&graph, 5, 4)?;
    assert_eq!(visited_set(&second), BTreeSet::from([4, 5, 6]));

    assert_matches_reference(&graph, 1)?;
    assert_matches_reference(&graph, 5)
}

#[test]
fn test_large_generated_graphs() -> Result<()> {
    let grid = generate::grid(120, 120).into_graph()?;
    let result = traversal::run(&grid, 0, 8)?;
    assert_eq!(result.visited_count(), 120 * 120);
    assert_eq!(result.levels(), 239);
    assert_closed(&grid, &result)?;
    assert_matches_reference(&grid, 0)?;

    let tree = generate::binary_tree(50_000).into_graph()?;
    assert_matches_reference(&tree, 0)
}

#[test]
fn test_invalid_input_rejected() {
    assert!(matches!(
        GraphStore::build([(0, 1), (1, 3)], 3),
        Err(Error::InvalidNode { node: 3, node_count: 3 })
    ));

    let graph = generate::path(3).into_graph().unwrap();
    assert!(matches!(
        traversal::run(&graph, -1, 2),
        Err(Error::InvalidRoot { root: -1, .. })
    ));
}

#[test]
fn test_scheduler_lifecycle() -> Result<()> {
    let graph = generate::path(3).into_graph()?;
    let scheduler = TraversalScheduler::new(&graph, TraversalConfig::with_workers(2))?;

    assert_eq!(scheduler.phase(), SchedulerPhase::Idle);
    scheduler.run(0)?;
    assert_eq!(scheduler.phase(), SchedulerPhase::Terminated);
    assert!(matches!(scheduler.run(1), Err(Error::AlreadyRunning)));
    Ok(())
}

#[test]
fn test_cancellation_returns_partial_result() -> Result<()> {
    let graph = generate::binary_tree(1_000).into_graph()?;
    let token = CancellationToken::new();
    token.cancel();

    let config = TraversalConfig::with_workers(4).with_cancellation(token);
    let error = TraversalScheduler::new(&graph, config)?
        .run(0)
        .expect_err("pre-cancelled traversal must not complete");
    assert_eq!(error.to_string(), "Traversal cancelled after 0 level(s)");

    let partial = error.into_partial().expect("cancellation carries a partial result");
    assert!(!partial.is_complete());
    assert_eq!(partial.state(NodeId::new(0)), VisitState::Enqueued);
    assert_eq!(partial.reachable_set().count(), 1);
    Ok(())
}

#[test]
fn test_graph_round_trips_through_edge_list() -> Result<()> {
    let graph = generate::grid(5, 4).into_graph()?;
    let text = {
        let mut buffer = Vec::new();
        EdgeList::from(&graph).write_to(&mut buffer)?;
        String::from_utf8(buffer).expect("edge list is ascii")
    };

    let reloaded = parse_graph(&text)?;
    assert_eq!(reloaded.node_count(), graph.node_count());
    assert_eq!(reloaded.edge_count(), graph.edge_count());
    for node in graph.nodes() {
        let mut expected = graph.neighbors(node)?.to_vec();
        let mut actual = reloaded.neighbors(node)?.to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }
    assert_eq!(
        traversal::run(&reloaded, 7, 2)?.states(),
        traversal::run(&graph, 7, 2)?.states()
    );
    Ok(())
}

fn random_graph() -> impl Strategy<Value = (usize, Vec<(i64, i64)>, i64)> {
    (1usize..80).prop_flat_map(|n| {
        let node = 0..n as i64;
        (
            Just(n),
            proptest::collection::vec((node.clone(), node.clone()), 0..240),
            node,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn parallel_matches_sequential_on_random_graphs(
        (node_count, edges, root) in random_graph(),
        workers in 1usize..6,
    ) {
        let graph = GraphStore::build(edges, node_count).expect("endpoints are in range");
        let reference = sequential_bfs(&graph, root).expect("root is in range");

        let config = TraversalConfig::with_workers(workers).with_min_chunk(1);
        let result = TraversalScheduler::new(&graph, config)
            .expect("pool builds")
            .run(root)
            .expect("traversal completes");

        prop_assert_eq!(result.states(), reference.states());
        prop_assert_eq!(result.level_sizes(), reference.level_sizes());
        prop_assert!(result.is_visited(NodeId::new(root as usize)));
        assert_closed(&graph, &result).expect("neighbors are in range");
    }
}
