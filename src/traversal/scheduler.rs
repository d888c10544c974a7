//! Level-synchronous parallel BFS driver.
//!
//! # Algorithm
//!
//! Starting from the root, which is claimed before the first level, every level runs:
//!
//! 1. **Drain**: the current [`Frontier`] is emptied into an immutable snapshot
//! 2. **Expand**: the snapshot is split over the worker pool with rayon's work-stealing
//!    iterators; for every neighbor of a snapshot node the worker calls
//!    [`VisitationState::try_claim`] and pushes the neighbor onto the next frontier only if
//!    the claim succeeded
//! 3. **Mark**: each snapshot node is marked `Visited` by the worker that expanded it
//! 4. **Barrier**: [`rayon::ThreadPool::install`] returns only after every worker finished,
//!    so all marks and pushes of level `k` happen-before the drain of level `k + 1`
//!
//! The loop ends when a drain yields nothing. Since a node can be claimed once, the number
//! of levels is bounded by the node count.
//!
//! # Phases
//!
//! A scheduler moves `Idle -> Running -> Terminated` exactly once. The transition out of
//! `Idle` is a compare-and-swap, so a second [`TraversalScheduler::run`] (concurrent or
//! after completion) fails with [`Error::AlreadyRunning`].

use std::{
    sync::atomic::{AtomicU8, Ordering},
    time::Instant,
};

use rayon::prelude::*;

use crate::{
    graph::{GraphStore, Neighbors, NodeId},
    traversal::{
        Frontier, TraversalConfig, TraversalStats, VisitationResult, VisitationState,
    },
    Error, Result,
};

/// Lifecycle of a [`TraversalScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[repr(u8)]
pub enum SchedulerPhase {
    /// Created, not started
    Idle = 0,
    /// A traversal is in progress
    Running = 1,
    /// The traversal ended (completed, failed or cancelled)
    Terminated = 2,
}

impl SchedulerPhase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            0 => SchedulerPhase::Idle,
            1 => SchedulerPhase::Running,
            _ => SchedulerPhase::Terminated,
        }
    }
}

/// Drives one level-synchronous parallel traversal over a graph.
///
/// The scheduler owns a dedicated [`rayon::ThreadPool`] of
/// [`TraversalConfig::workers`] threads. All traversal state (visitation marks,
/// frontiers, statistics) is created inside [`TraversalScheduler::run`] and handed to the
/// caller in the returned [`VisitationResult`]; nothing outlives the call or is shared
/// with other schedulers.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the borrowed graph
/// * `G` - Graph type implementing [`Neighbors`]; must be [`Sync`] since every worker
///   reads it
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::{generate, NodeId}, traversal::{TraversalConfig, TraversalScheduler}};
///
/// let graph = generate::grid(8, 8).into_graph()?;
/// let scheduler = TraversalScheduler::new(&graph, TraversalConfig::with_workers(4))?;
///
/// let result = scheduler.run(0)?;
/// assert_eq!(result.visited_count(), 64);
/// // Manhattan distance from the corner to the far corner is 14
/// assert_eq!(result.levels(), 15);
///
/// // A scheduler is single-use
/// assert!(scheduler.run(0).is_err());
/// # Ok::<(), parbfs::Error>(())
/// ```
pub struct TraversalScheduler<'g, G: ?Sized = GraphStore> {
    graph: &'g G,
    pool: rayon::ThreadPool,
    config: TraversalConfig,
    phase: AtomicU8,
}

impl<'g, G> TraversalScheduler<'g, G>
where
    G: Neighbors + Sync + ?Sized,
{
    /// Creates an idle scheduler and its worker pool.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWorkerCount`] if `config.workers` is 0
    /// - [`Error::ThreadPool`] if the worker threads cannot be spawned
    pub fn new(graph: &'g G, config: TraversalConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(Error::InvalidWorkerCount(config.workers));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|index| format!("parbfs-worker-{index}"))
            .build()?;

        Ok(TraversalScheduler {
            graph,
            pool,
            config,
            phase: AtomicU8::new(SchedulerPhase::Idle as u8),
        })
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SchedulerPhase {
        SchedulerPhase::from_raw(self.phase.load(Ordering::Acquire))
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.config.workers
    }

    /// Runs the traversal from `root` to completion.
    ///
    /// The root is validated before the scheduler leaves `Idle`, so a rejected root does not
    /// use up the scheduler.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRoot`] if `root` is outside `[0, node_count)`
    /// - [`Error::AlreadyRunning`] if this scheduler was already started
    /// - [`Error::GraphTooLarge`] if the per-node state cannot be allocated
    /// - [`Error::OutOfRange`] if the graph reports a neighbor outside its own node range
    /// - [`Error::Cancelled`] with the partial result if the configured
    ///   [`CancellationToken`](crate::traversal::CancellationToken) fired
    pub fn run(&self, root: i64) -> Result<VisitationResult> {
        let node_count = self.graph.node_count();
        let root_node =
            NodeId::checked(root, node_count).ok_or(Error::InvalidRoot { root, node_count })?;

        self.phase
            .compare_exchange(
                SchedulerPhase::Idle as u8,
                SchedulerPhase::Running as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| Error::AlreadyRunning)?;

        let outcome = self.traverse(root_node);
        self.phase
            .store(SchedulerPhase::Terminated as u8, Ordering::Release);
        outcome
    }

    fn is_cancelled(&self) -> bool {
        self.config
            .cancel
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }

    fn traverse(&self, root: NodeId) -> Result<VisitationResult> {
        let start = Instant::now();
        let state = VisitationState::try_new(self.graph.node_count())?;
        let root_claimed = state.try_claim(root);
        debug_assert!(root_claimed, "fresh state must accept the root");
        let mut frontier = Frontier::with_root(root);
        let mut stats = TraversalStats {
            workers: self.config.workers,
            ..TraversalStats::default()
        };

        loop {
            let level = frontier.drain();
            if level.is_empty() {
                break;
            }

            if self.is_cancelled() {
                // The drained nodes stay `Enqueued` in the partial result
                stats.elapsed = start.elapsed();
                log::info!(
                    "traversal from {} cancelled after {} level(s), {} node(s) pending",
                    root,
                    stats.levels(),
                    level.len()
                );
                let partial = VisitationResult::new(root, state.into_states(), stats, false);
                return Err(Error::Cancelled(Box::new(partial)));
            }

            log::debug!("level {}: expanding {} node(s)", stats.levels(), level.len());
            stats.edges_scanned += self.expand_level(&level, &state, &frontier)?;
            stats.level_sizes.push(level.len());
        }

        stats.elapsed = start.elapsed();
        let result = VisitationResult::new(root, state.into_states(), stats, true);
        log::info!(
            "traversal from {} finished: {} node(s) visited in {} level(s), {:?} on {} worker(s)",
            root,
            result.visited_count(),
            result.levels(),
            result.stats().elapsed,
            self.config.workers
        );
        Ok(result)
    }

    /// Expands one level on the pool and returns the number of neighbor entries scanned.
    fn expand_level(
        &self,
        level: &[NodeId],
        state: &VisitationState,
        next: &Frontier,
    ) -> Result<usize> {
        let graph = self.graph;
        let node_count = graph.node_count();

        self.pool.install(|| {
            level
                .par_iter()
                .with_min_len(self.config.min_chunk)
                .map(|&node| {
                    let neighbors = graph.neighbors(node)?;
                    for &neighbor in neighbors {
                        if neighbor.index() >= node_count {
                            return Err(Error::OutOfRange {
                                node: neighbor.index(),
                                node_count,
                            });
                        }
                        if state.try_claim(neighbor) {
                            next.push(neighbor);
                        }
                    }
                    state.mark_visited(node);
                    Ok(neighbors.len())
                })
                .try_reduce(|| 0, |a, b| Ok(a + b))
        })
    }
}

/// Runs a parallel traversal of `graph` from `root` with `worker_count` workers.
///
/// Shorthand for building a [`TraversalScheduler`] with
/// [`TraversalConfig::with_workers`] and running it once.
///
/// # Errors
///
/// Any error of [`TraversalScheduler::new`] or [`TraversalScheduler::run`].
///
/// # Examples
///
/// ```rust
/// use parbfs::{graph::GraphStore, traversal, Error};
///
/// let graph = GraphStore::build([(0, 1), (1, 2)], 4)?;
/// let result = traversal::run(&graph, 0, 2)?;
/// assert_eq!(result.visited_count(), 3);
///
/// assert!(matches!(traversal::run(&graph, 4, 2), Err(Error::InvalidRoot { .. })));
/// # Ok::<(), parbfs::Error>(())
/// ```
pub fn run<G>(graph: &G, root: i64, worker_count: usize) -> Result<VisitationResult>
where
    G: Neighbors + Sync + ?Sized,
{
    TraversalScheduler::new(graph, TraversalConfig::with_workers(worker_count))?.run(root)
}
