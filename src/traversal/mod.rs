//! Parallel breadth-first traversal.
//!
//! # Architecture
//!
//! The traversal is level-synchronous. Each level drains the shared [`Frontier`], expands
//! the drained nodes on a rayon pool and waits for every worker before starting the next
//! level. Discovery races between workers are settled by [`VisitationState::try_claim`],
//! an atomic compare-and-swap that lets exactly one worker enqueue each node.
//!
//! # Components
//!
//! - [`VisitState`] / [`VisitationState`] - Per-node atomic claim table
//! - [`Frontier`] - Concurrent push, exclusive drain queue for one level
//! - [`TraversalScheduler`] - Owns the worker pool and drives the levels
//! - [`TraversalConfig`] / [`CancellationToken`] - Worker count, chunking and cancellation
//! - [`VisitationResult`] / [`TraversalStats`] - What a traversal hands back
//! - [`sequential_bfs`] - Single-threaded reference used to check the parallel results
//!
//! # Examples
//!
//! ```rust
//! use parbfs::{graph::GraphStore, traversal};
//!
//! let graph = GraphStore::build([(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)], 5)?;
//!
//! let parallel = traversal::run(&graph, 0, 4)?;
//! let reference = traversal::sequential_bfs(&graph, 0)?;
//! assert_eq!(parallel.states(), reference.states());
//! # Ok::<(), parbfs::Error>(())
//! ```

mod cancel;
mod config;
mod frontier;
mod result;
mod scheduler;
mod sequential;
mod state;
mod stats;

pub use cancel::CancellationToken;
pub use config::{TraversalConfig, DEFAULT_MIN_CHUNK};
pub use frontier::Frontier;
pub use result::VisitationResult;
pub use scheduler::{run, SchedulerPhase, TraversalScheduler};
pub use sequential::sequential_bfs;
pub use state::{VisitState, VisitationState};
pub use stats::TraversalStats;
